use super::{
    client::ApiClient,
    types::{
        ApiError, ApiResponse, AuthTokens, ErrorKind, LoginCredentials, LoginData, RefreshData,
        RefreshRequest, VerifyOtpData, VerifyOtpRequest,
    },
};

const INVALID_LOGIN_RESPONSE: &str = "Invalid response from server";

impl ApiClient {
    /// `POST /auth/login`. Succeeds only when the server asks for an OTP.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        let response: ApiResponse<LoginData> = self
            .post_json("/auth/login", credentials)
            .await
            .map_err(|err| match err.kind() {
                ErrorKind::Protocol => ApiError::protocol(INVALID_LOGIN_RESPONSE),
                _ => err,
            })?;
        if !response.data.requires_otp {
            return Err(ApiError::protocol(INVALID_LOGIN_RESPONSE));
        }
        Ok(())
    }

    pub async fn verify_otp(&self, email: &str, otp: &str) -> Result<VerifyOtpData, ApiError> {
        let request = VerifyOtpRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        let response: ApiResponse<VerifyOtpData> =
            self.post_json("/auth/verify-otp", &request).await?;
        Ok(response.data)
    }

    pub async fn refresh_tokens(&self, refresh_token: &str) -> Result<AuthTokens, ApiError> {
        let request = RefreshRequest {
            refresh_token: refresh_token.to_string(),
        };
        let response: ApiResponse<RefreshData> = self.post_json("/auth/refresh", &request).await?;
        Ok(response.data.tokens)
    }
}

use crate::api::ApiError;

pub const OTP_FAILED_MESSAGE: &str = "OTP is not correct";

pub fn otp_failure(mut err: ApiError) -> ApiError {
    if err.message.trim().is_empty() {
        err.message = OTP_FAILED_MESSAGE.to_string();
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_message_gets_generic_text() {
        let blank = ApiError {
            message: String::new(),
            code: None,
            status: Some(400),
        };
        assert_eq!(otp_failure(blank).message, OTP_FAILED_MESSAGE);
        assert_eq!(
            otp_failure(ApiError::precondition("No pending login. Please sign in again.")).message,
            "No pending login. Please sign in again."
        );
    }
}

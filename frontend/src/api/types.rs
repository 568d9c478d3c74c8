use leptos::*;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

pub const NETWORK_ERROR: &str = "NETWORK_ERROR";
pub const PROTOCOL_ERROR: &str = "PROTOCOL_ERROR";
pub const VALIDATION_ERROR: &str = "VALIDATION_ERROR";
pub const PRECONDITION_FAILED: &str = "PRECONDITION_FAILED";

pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please check your connection.";
pub const UNEXPECTED_ERROR_MESSAGE: &str = "An unexpected error occurred";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthTokens {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    pub email: String,
    pub otp: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshRequest {
    pub refresh_token: String,
}

/// Every success body from the API wraps its payload in `data`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginData {
    #[serde(rename = "requiresOTP", default)]
    pub requires_otp: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifyOtpData {
    pub user: User,
    pub tokens: AuthTokens,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RefreshData {
    pub tokens: AuthTokens,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Protocol,
    Authorization,
    Validation,
    Precondition,
    Server,
}

#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

impl ApiError {
    fn with_code(message: impl Into<String>, code: &str) -> Self {
        Self {
            message: message.into(),
            code: Some(code.to_string()),
            status: None,
        }
    }

    pub fn network() -> Self {
        Self::with_code(NETWORK_ERROR_MESSAGE, NETWORK_ERROR)
    }

    pub fn protocol(msg: impl Into<String>) -> Self {
        Self::with_code(msg, PROTOCOL_ERROR)
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_code(msg, VALIDATION_ERROR)
    }

    pub fn precondition(msg: impl Into<String>) -> Self {
        Self::with_code(msg, PRECONDITION_FAILED)
    }

    /// Normalizes a non-2xx reply; the body is whatever JSON the server sent, if any.
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        let field = |name: &str| {
            body.and_then(|b| b.get(name))
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            message: field("message").unwrap_or_else(|| UNEXPECTED_ERROR_MESSAGE.to_string()),
            code: field("code"),
            status: Some(status),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        if self.status == Some(401) {
            return ErrorKind::Authorization;
        }
        match self.code.as_deref() {
            Some(NETWORK_ERROR) => ErrorKind::Network,
            Some(PROTOCOL_ERROR) => ErrorKind::Protocol,
            Some(VALIDATION_ERROR) => ErrorKind::Validation,
            Some(PRECONDITION_FAILED) => ErrorKind::Precondition,
            _ => ErrorKind::Server,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.kind() == ErrorKind::Authorization
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.message
    }
}

impl IntoView for ApiError {
    fn into_view(self) -> View {
        self.message.into_view()
    }
}

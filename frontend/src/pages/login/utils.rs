use crate::api::ApiError;

pub const LOGIN_FAILED_MESSAGE: &str = "Username or password is not correct";

/// Error as shown on the form; a blank server message gets the generic one.
pub fn login_failure(mut err: ApiError) -> ApiError {
    if err.message.trim().is_empty() {
        err.message = LOGIN_FAILED_MESSAGE.to_string();
    }
    err
}

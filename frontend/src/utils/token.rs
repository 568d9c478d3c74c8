//! Best-effort inspection of access tokens.
//!
//! The client has no verification key, so nothing here checks signatures.
//! Callers treat an undecodable token as "no refresh needed"; the server
//! rejects it with a 401 anyway.

use base64::{
    engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD},
    Engine as _,
};
use serde_json::Value;
use thiserror::Error;

use crate::{api::AuthTokens, utils::time::now_millis};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeFailure {
    #[error("token has no payload segment")]
    MissingPayload,
    #[error("token payload is not base64")]
    InvalidBase64,
    #[error("token payload is not a JSON object")]
    InvalidPayload,
    #[error("token payload has no numeric exp claim")]
    MissingExpiry,
}

/// Expiry of `access_token` in milliseconds since the epoch.
pub fn decode_expiry(access_token: &str) -> Result<i64, DecodeFailure> {
    let mut segments = access_token.split('.');
    segments.next();
    let payload = segments
        .next()
        .filter(|segment| !segment.is_empty())
        .ok_or(DecodeFailure::MissingPayload)?;
    let payload = payload.trim_end_matches('=');
    let decoded = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .map_err(|_| DecodeFailure::InvalidBase64)?;
    let claims: Value =
        serde_json::from_slice(&decoded).map_err(|_| DecodeFailure::InvalidPayload)?;
    if !claims.is_object() {
        return Err(DecodeFailure::InvalidPayload);
    }
    let exp = claims
        .get("exp")
        .and_then(Value::as_f64)
        .map(|exp| exp * 1000.0)
        .filter(|ms| (i64::MIN as f64..i64::MAX as f64).contains(ms))
        .ok_or(DecodeFailure::MissingExpiry)?;
    Ok(exp as i64)
}

pub fn is_near_expiry(tokens: Option<&AuthTokens>, buffer_ms: i64) -> bool {
    is_near_expiry_at(tokens, buffer_ms, now_millis())
}

pub fn is_near_expiry_at(tokens: Option<&AuthTokens>, buffer_ms: i64, now_ms: i64) -> bool {
    let Some(access_token) = tokens
        .map(|t| t.access_token.as_str())
        .filter(|token| !token.is_empty())
    else {
        return false;
    };
    match decode_expiry(access_token) {
        Ok(expires_at) => expires_at.saturating_sub(now_ms) < buffer_ms,
        Err(failure) => {
            log::warn!("Failed to decode access token: {}", failure);
            false
        }
    }
}

#[cfg(test)]
pub(crate) fn token_expiring_at(exp_seconds: i64) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"u1","exp":{}}}"#, exp_seconds));
    format!("{}.{}.signature", header, payload)
}

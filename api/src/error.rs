//! # Error type for API calls
//!
//! Every [`crate::ApiClient`] method resolves to `Result<T, ApiError>`.
//! Failures are terminal to the triggering action: callers surface the
//! message and move on, there is no retry or recovery layer.
//!
//! Server errors carry whatever message the backend put in the response
//! body. The backend is not consistent about the shape — its own handlers
//! answer `{"error": "..."}`, the framework answers `{"detail": "..."}`,
//! and serializer validation answers a field→messages map — so
//! [`error_message`] tries each in turn before falling back to a generic
//! string.

use serde_json::Value;
use thiserror::Error;

/// Fallback when the server body yields no usable message.
const GENERIC_MESSAGE: &str = "Unknown error";

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never produced a response (network down, bad URL, ...).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },
}

impl ApiError {
    /// Build an [`ApiError::Api`] from a response status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        Self::Api {
            status,
            message: error_message(body),
        }
    }

    /// True when the server rejected the request as unauthenticated.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}

/// Extract a human-readable message from an error response body.
///
/// Tries, in order: `{"error": "..."}`, `{"detail": "..."}`, the first
/// message of a DRF field-error map (`{"field": ["msg", ...]}`), then the
/// generic fallback.
pub fn error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return GENERIC_MESSAGE.to_string();
    };

    if let Some(msg) = value.get("error").and_then(Value::as_str) {
        return msg.to_string();
    }
    if let Some(msg) = value.get("detail").and_then(Value::as_str) {
        return msg.to_string();
    }

    // Serializer validation: {"title": ["This field is required."], ...}
    if let Some(map) = value.as_object() {
        for (field, messages) in map {
            let first = match messages {
                Value::Array(items) => items.first().and_then(Value::as_str),
                Value::String(s) => Some(s.as_str()),
                _ => None,
            };
            if let Some(msg) = first {
                return format!("{field}: {msg}");
            }
        }
    }

    GENERIC_MESSAGE.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_key_wins() {
        let msg = error_message(r#"{"error": "Bu kullanıcı adı zaten alınmış"}"#);
        assert_eq!(msg, "Bu kullanıcı adı zaten alınmış");
    }

    #[test]
    fn test_detail_key() {
        let msg = error_message(r#"{"detail": "Authentication credentials were not provided."}"#);
        assert_eq!(msg, "Authentication credentials were not provided.");
    }

    #[test]
    fn test_field_error_map() {
        let msg = error_message(r#"{"title": ["This field is required."]}"#);
        assert_eq!(msg, "title: This field is required.");
    }

    #[test]
    fn test_non_json_body_falls_back() {
        assert_eq!(error_message("<html>502 Bad Gateway</html>"), "Unknown error");
    }

    #[test]
    fn test_empty_object_falls_back() {
        assert_eq!(error_message("{}"), "Unknown error");
    }

    #[test]
    fn test_from_response_keeps_status() {
        let err = ApiError::from_response(401, r#"{"detail": "Invalid token."}"#);
        assert!(err.is_unauthorized());
        assert_eq!(err.to_string(), "Invalid token.");
    }
}

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Failure of a backend call, already shaped for display.
///
/// `Rejected` carries the backend's own message verbatim plus any
/// per-field errors; every other variant renders a generic text so raw
/// transport noise never reaches the screen.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// No token in the session, or the backend answered 401. The session
    /// reset routes the user to the login screen.
    #[error("Session expired. Please sign in again")]
    Unauthorized,

    /// The request never produced an HTTP response.
    #[error("Could not reach the server. Check your connection and try again")]
    Network(String),

    /// Structured rejection from the backend.
    #[error("{message}")]
    Rejected {
        status: u16,
        message: String,
        field_errors: HashMap<String, String>,
    },

    /// Non-success response whose body carried no usable error payload.
    #[error("Request failed with status {0}")]
    Http(u16),

    /// Success response whose body could not be decoded.
    #[error("Received an unexpected response from the server")]
    Decode(String),
}

/// Error payload convention of the backend.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorBody {
    message: Option<String>,
    #[serde(default)]
    errors: HashMap<String, String>,
}

/// Interpret a non-success response body. A parsable payload keeps the
/// backend's wording; anything else falls back to the status code.
pub fn parse_error_body(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) if parsed.message.is_some() || !parsed.errors.is_empty() => {
            ApiError::Rejected {
                status,
                message: parsed
                    .message
                    .unwrap_or_else(|| "The request was rejected".to_string()),
                field_errors: parsed.errors,
            }
        }
        _ => ApiError::Http(status),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn structured_body_keeps_backend_wording() {
        let body = r#"{"message":"Invoice number is already used","errors":{"invoiceNumber":"Duplicate"}}"#;
        let err = parse_error_body(400, body);
        match err {
            ApiError::Rejected {
                status,
                message,
                field_errors,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invoice number is already used");
                assert_eq!(field_errors.get("invoiceNumber").unwrap(), "Duplicate");
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn message_only_body_is_still_structured() {
        let err = parse_error_body(409, r#"{"message":"Already completed"}"#);
        assert_eq!(err.to_string(), "Already completed");
    }

    #[test]
    fn field_errors_without_message_get_a_stock_line() {
        let err = parse_error_body(422, r#"{"errors":{"name":"Required"}}"#);
        match err {
            ApiError::Rejected {
                message,
                field_errors,
                ..
            } => {
                assert_eq!(message, "The request was rejected");
                assert_eq!(field_errors.len(), 1);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unparsable_body_falls_back_to_status() {
        let err = parse_error_body(502, "<html>Bad Gateway</html>");
        assert_eq!(err, ApiError::Http(502));
        assert_eq!(err.to_string(), "Request failed with status 502");
    }

    #[test]
    fn empty_body_falls_back_to_status() {
        assert_eq!(parse_error_body(500, ""), ApiError::Http(500));
    }

    #[test]
    fn generic_variants_never_leak_internals() {
        let network = ApiError::Network("fetch failed: dns".to_string());
        assert_eq!(
            network.to_string(),
            "Could not reach the server. Check your connection and try again"
        );

        let decode = ApiError::Decode("expected value at line 1".to_string());
        assert_eq!(
            decode.to_string(),
            "Received an unexpected response from the server"
        );
    }
}

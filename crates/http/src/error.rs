//! Client error types

use thiserror::Error;

/// Errors a screen can receive from the booking API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Create error from HTTP status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// The message a screen should show the user.
    ///
    /// The backend wraps failures as `{"message": ...}` (or `{"error": ...}`
    /// for appointment creation); this strips that envelope when present so
    /// forms can display the server-provided text directly.
    pub fn display_message(&self) -> String {
        match self {
            Self::ServerError { message, .. }
            | Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Forbidden(message) => extract_server_message(message),
            other => other.to_string(),
        }
    }
}

/// Pull `message` or `error` out of a JSON error body, falling back to the
/// raw text.
fn extract_server_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(text) = value.get(key).and_then(|v| v.as_str()) {
                return text.to_string();
            }
        }
    }
    body.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_status_maps_common_codes() {
        let err = ClientError::from_status(reqwest::StatusCode::UNAUTHORIZED, "nope".into());
        assert!(matches!(err, ClientError::AuthenticationFailed(_)));

        let err = ClientError::from_status(reqwest::StatusCode::NOT_FOUND, "gone".into());
        assert!(matches!(err, ClientError::NotFound(_)));

        let err =
            ClientError::from_status(reqwest::StatusCode::INTERNAL_SERVER_ERROR, "boom".into());
        assert!(matches!(err, ClientError::ServerError { status: 500, .. }));
    }

    #[test]
    fn display_message_unwraps_json_bodies() {
        let err = ClientError::BadRequest(r#"{"message":"Email already taken"}"#.into());
        assert_eq!(err.display_message(), "Email already taken");

        let err = ClientError::BadRequest(r#"{"error":"Slot unavailable"}"#.into());
        assert_eq!(err.display_message(), "Slot unavailable");
    }

    #[test]
    fn display_message_passes_plain_text_through() {
        let err = ClientError::Forbidden("forbidden".into());
        assert_eq!(err.display_message(), "forbidden");
    }
}

//! Client error types

use crate::resources::ValidationError;
use serde::Deserialize;
use thiserror::Error;

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// The server rejected the token
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Response body did not match the expected record shape
    #[error("Unexpected response: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// No token in the session store; nothing was sent
    #[error("Not signed in")]
    NotAuthenticated,

    /// Rejected before submission
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl ClientError {
    /// Create error from HTTP status code and the raw response body.
    /// A JSON `message` (or `error`) field is preferred over the raw text.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|body| body.message.or(body.error))
            .filter(|message| !message.is_empty())
            .unwrap_or_else(|| {
                let body = body.trim();
                if body.is_empty() {
                    status.canonical_reason().unwrap_or("request failed").to_string()
                } else {
                    body.to_string()
                }
            });

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

    /// The session is gone, either locally or according to the server
    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_) | Self::NotAuthenticated)
    }

    /// Text suitable for an alert: the server's own wording when it sent one
    pub fn user_message(&self) -> String {
        match self {
            Self::BadRequest(message)
            | Self::AuthenticationFailed(message)
            | Self::Forbidden(message)
            | Self::NotFound(message)
            | Self::ServerError { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn server_message_field_is_preferred() {
        let error = ClientError::from_status(
            StatusCode::BAD_REQUEST,
            r#"{"message":"Only one Sarpanch is allowed"}"#,
        );
        assert!(matches!(error, ClientError::BadRequest(_)));
        assert_eq!(error.user_message(), "Only one Sarpanch is allowed");
    }

    #[test]
    fn plain_text_and_empty_bodies_still_produce_a_message() {
        let error = ClientError::from_status(StatusCode::BAD_GATEWAY, "upstream down");
        assert!(matches!(error, ClientError::ServerError { status: 502, .. }));
        assert_eq!(error.user_message(), "upstream down");

        let error = ClientError::from_status(StatusCode::NOT_FOUND, "");
        assert_eq!(error.user_message(), "Not Found");
    }

    #[test]
    fn unauthorized_marks_the_session_as_gone() {
        let error = ClientError::from_status(StatusCode::UNAUTHORIZED, r#"{"error":"jwt expired"}"#);
        assert!(error.is_auth_expired());
        assert_eq!(error.user_message(), "jwt expired");
        assert!(ClientError::NotAuthenticated.is_auth_expired());
        assert!(!ClientError::Forbidden("no".into()).is_auth_expired());
    }
}

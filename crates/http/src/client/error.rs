//! Client error types

use serde::Deserialize;
use std::fmt;
use thiserror::Error;

/// Message carried by an error response.
///
/// The backend answers failures with `{"detail": "<message>"}`. `detail` is only
/// set when the body has that shape with a string value; `raw` always keeps the
/// (trimmed) body, or the status reason when the body was empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiMessage {
    pub raw: String,
    pub detail: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

impl ApiMessage {
    /// Parse an error body returned with `status`
    pub fn from_body(status: reqwest::StatusCode, body: &str) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(body)
            .ok()
            .and_then(|parsed| parsed.detail.as_str().map(str::to_owned))
            .filter(|detail| !detail.trim().is_empty());

        let trimmed = body.trim();
        let raw = if trimmed.is_empty() {
            status
                .canonical_reason()
                .map_or_else(|| status.as_u16().to_string(), str::to_owned)
        } else {
            trimmed.to_owned()
        };

        Self { raw, detail }
    }
}

impl fmt::Display for ApiMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.detail.as_deref().unwrap_or(&self.raw))
    }
}

/// Client error types
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or request error
    #[error("Request failed: {0}")]
    Request(reqwest::Error),

    /// The request did not complete within the configured timeout
    #[error("Request timed out")]
    Timeout,

    /// Server returned an error status
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: ApiMessage },

    /// Authentication failed
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(ApiMessage),

    /// Resource not found
    #[error("Resource not found: {0}")]
    NotFound(ApiMessage),

    /// Bad request
    #[error("Bad request: {0}")]
    BadRequest(ApiMessage),

    /// Forbidden
    #[error("Forbidden: {0}")]
    Forbidden(ApiMessage),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Request(error)
        }
    }
}

impl ClientError {
    /// Create error from HTTP status code and response body
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let message = ApiMessage::from_body(status, body);
        match status.as_u16() {
            400 | 422 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            _ => Self::ServerError {
                status: status.as_u16(),
                message,
            },
        }
    }

    /// The backend's `detail` message, if the error came with one
    pub fn detail(&self) -> Option<&str> {
        self.api_message()
            .and_then(|message| message.detail.as_deref())
    }

    /// HTTP status of the failed response, if the server answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::ServerError { status, .. } => Some(*status),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::BadRequest(_) => Some(400),
            _ => None,
        }
    }

    /// Whether the server rejected the bearer credential
    pub const fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthenticationFailed(_))
    }

    const fn api_message(&self) -> Option<&ApiMessage> {
        match self {
            Self::ServerError { message, .. }
            | Self::AuthenticationFailed(message)
            | Self::NotFound(message)
            | Self::BadRequest(message)
            | Self::Forbidden(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn detail_is_extracted_from_fastapi_body() {
        let error = ClientError::from_status(
            StatusCode::UNAUTHORIZED,
            r#"{"detail":"Credenciales inválidas"}"#,
        );
        assert!(error.is_auth_expired());
        assert_eq!(error.detail(), Some("Credenciales inválidas"));
        assert_eq!(
            error.to_string(),
            "Authentication failed: Credenciales inválidas"
        );
    }

    #[test]
    fn plain_text_body_has_no_detail() {
        let error = ClientError::from_status(StatusCode::INTERNAL_SERVER_ERROR, "boom");
        assert_eq!(error.detail(), None);
        assert_eq!(error.status(), Some(500));
        assert!(matches!(error, ClientError::ServerError { status: 500, .. }));
    }

    #[test]
    fn validation_errors_are_bad_requests_without_detail() {
        // FastAPI validation errors carry a list, not a string
        let error = ClientError::from_status(
            StatusCode::UNPROCESSABLE_ENTITY,
            r#"{"detail":[{"loc":["body","correo"],"msg":"field required"}]}"#,
        );
        assert!(matches!(error, ClientError::BadRequest(_)));
        assert_eq!(error.detail(), None);
    }

    #[test]
    fn empty_body_falls_back_to_reason() {
        let message = ApiMessage::from_body(StatusCode::FORBIDDEN, "  ");
        assert_eq!(message.raw, "Forbidden");
        assert_eq!(message.to_string(), "Forbidden");
    }
}

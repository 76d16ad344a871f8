//! Authentication error taxonomy

use senso_http::ClientError;
use thiserror::Error;

/// Shown when the backend gives no usable reason for a failed login
pub const GENERIC_AUTH_ERROR: &str = "Error de autenticación";

/// Shown when the login request does not complete in time
pub const LOGIN_TIMEOUT_ERROR: &str = "La solicitud tardó demasiado. Intenta de nuevo.";

/// Failures of the authentication layer.
///
/// The payload is always a message fit for display next to the login form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The request did not complete (transport failure or timeout)
    #[error("{0}")]
    Network(String),

    /// The backend refused the credentials or answered something unusable
    #[error("{0}")]
    Authentication(String),

    /// Persisted session data could not be decoded
    #[error("{0}")]
    MalformedSession(String),
}

impl AuthError {
    pub fn message(&self) -> &str {
        match self {
            Self::Network(message) | Self::Authentication(message) | Self::MalformedSession(message) => {
                message
            }
        }
    }

    /// Stable label for logs
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Network(_) => "network",
            Self::Authentication(_) => "authentication",
            Self::MalformedSession(_) => "malformed_session",
        }
    }

    pub fn timeout() -> Self {
        Self::Network(LOGIN_TIMEOUT_ERROR.to_string())
    }
}

impl From<ClientError> for AuthError {
    fn from(error: ClientError) -> Self {
        match error {
            ClientError::Timeout => Self::timeout(),
            ClientError::Request(ref source) => {
                tracing::debug!(error = %source, "login request did not complete");
                Self::Network("No se pudo conectar con el servidor.".to_string())
            }
            other => Self::Authentication(
                other
                    .detail()
                    .map_or_else(|| GENERIC_AUTH_ERROR.to_string(), str::to_owned),
            ),
        }
    }
}

/// Durable storage write failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Storage write failed for '{key}': {reason}")]
pub struct StorageError {
    pub key: String,
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use senso_http::client::ApiMessage;

    #[test]
    fn rejection_uses_backend_detail() {
        let error = AuthError::from(ClientError::AuthenticationFailed(ApiMessage {
            raw: r#"{"detail":"Credenciales inválidas"}"#.into(),
            detail: Some("Credenciales inválidas".into()),
        }));
        assert_eq!(error, AuthError::Authentication("Credenciales inválidas".into()));
    }

    #[test]
    fn rejection_without_detail_is_generic() {
        let error = AuthError::from(ClientError::ServerError {
            status: 502,
            message: ApiMessage {
                raw: "Bad Gateway".into(),
                detail: None,
            },
        });
        assert_eq!(error.message(), GENERIC_AUTH_ERROR);
    }

    #[test]
    fn timeout_is_a_network_error() {
        let error = AuthError::from(ClientError::Timeout);
        assert_eq!(error.kind(), "network");
        assert_eq!(error.message(), LOGIN_TIMEOUT_ERROR);
    }
}

//! User-facing messages for failed back-office calls

use senso_http::ClientError;

/// Message to show next to a view whose data request failed
pub fn user_message(error: &ClientError) -> String {
    if let Some(detail) = error.detail() {
        return detail.to_string();
    }

    match error {
        ClientError::Timeout => "El servidor tardó demasiado en responder.".to_string(),
        ClientError::Request(_) => "No se pudo conectar con el servidor.".to_string(),
        ClientError::AuthenticationFailed(_) => {
            "Tu sesión expiró. Inicia sesión de nuevo.".to_string()
        }
        ClientError::Forbidden(_) => "No tienes permisos para realizar esta acción.".to_string(),
        ClientError::NotFound(_) => "El recurso solicitado no existe.".to_string(),
        ClientError::BadRequest(_) => "Los datos enviados no son válidos.".to_string(),
        ClientError::Serialization(_) => "Respuesta inesperada del servidor.".to_string(),
        ClientError::ServerError { .. } | ClientError::Configuration(_) => {
            "Ocurrió un error inesperado. Intenta más tarde.".to_string()
        }
    }
}

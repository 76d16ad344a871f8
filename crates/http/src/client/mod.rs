//! Senso HTTP client

pub mod auth;
pub mod error;
pub mod registrations;
pub mod typed;

pub use error::{ApiMessage, ClientError};
pub use typed::{AuthenticatedSensoClient, PublicSensoClient, TypedClientBuilder};

use reqwest::Response;
use serde::de::DeserializeOwned;

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = "senso-client/0.1.0";

/// Decode a JSON body, or turn a non-2xx response into a `ClientError`
async fn handle_json<T: DeserializeOwned>(response: Response) -> Result<T, ClientError> {
    let status = response.status();
    let body = response.text().await?;

    if status.is_success() {
        Ok(serde_json::from_str(&body)?)
    } else {
        Err(ClientError::from_status(status, &body))
    }
}

/// Accept any 2xx response regardless of its body
async fn handle_empty(response: Response) -> Result<(), ClientError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(ClientError::from_status(status, &body))
    }
}

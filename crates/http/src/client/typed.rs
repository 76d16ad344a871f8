//! Type-safe API clients that enforce authentication requirements at compile time

use super::{handle_empty, handle_json, ClientError};
use reqwest::{header, Client, ClientBuilder};
use serde::de::DeserializeOwned;
use std::fmt;
use std::time::Duration;

/// Client for public endpoints that don't require authentication
#[derive(Clone)]
pub struct PublicSensoClient {
    client: Client,
    base_url: String,
}

/// Client for endpoints that require a bearer credential
#[derive(Clone)]
pub struct AuthenticatedSensoClient {
    client: Client,
    base_url: String,
    token: String,
}

fn build_http_client(timeout: Option<Duration>) -> Result<Client, ClientError> {
    #[cfg(not(target_arch = "wasm32"))]
    let client = {
        let mut builder = ClientBuilder::new().user_agent(super::USER_AGENT);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder.build()?
    };

    #[cfg(target_arch = "wasm32")]
    let client = {
        let _ = timeout; // the browser owns request deadlines
        ClientBuilder::new().build()?
    };

    Ok(client)
}

fn join_url(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url, path.trim_start_matches('/'))
}

impl PublicSensoClient {
    /// Create a new public client
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new_with_timeout(base_url, None)
    }

    fn new_with_timeout(
        base_url: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = build_http_client(timeout)?;
        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Create a request builder without authentication
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client.request(method, join_url(&self.base_url, path))
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        handle_json(request.send().await?).await
    }

    /// Execute a request whose response body is irrelevant
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        handle_empty(request.send().await?).await
    }

    /// Attach a bearer credential, sharing the underlying connection pool
    pub fn authenticate(&self, token: impl Into<String>) -> AuthenticatedSensoClient {
        AuthenticatedSensoClient {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: token.into(),
        }
    }
}

impl AuthenticatedSensoClient {
    /// Create a request builder carrying `Authorization: Bearer <token>`
    pub fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        self.client
            .request(method, join_url(&self.base_url, path))
            .header(header::AUTHORIZATION, format!("Bearer {}", self.token))
    }

    /// Execute a request and decode its JSON body
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        handle_json(request.send().await?).await
    }

    /// Execute a request whose response body is irrelevant
    pub async fn execute_empty(&self, request: reqwest::RequestBuilder) -> Result<(), ClientError> {
        handle_empty(request.send().await?).await
    }
}

impl fmt::Debug for AuthenticatedSensoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthenticatedSensoClient")
            .field("base_url", &self.base_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for PublicSensoClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublicSensoClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Type-safe builder that creates the appropriate client type
#[derive(Default)]
pub struct TypedClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl TypedClientBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL, an absolute `http` or `https` origin
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout (ignored on wasm)
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build a public client
    pub fn build_public(self) -> Result<PublicSensoClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?;

        let absolute = base_url.starts_with("http://") || base_url.starts_with("https://");
        if !absolute {
            return Err(ClientError::Configuration(format!(
                "base_url must be an absolute http(s) URL, got {base_url:?}"
            )));
        }

        PublicSensoClient::new_with_timeout(base_url, self.timeout)
    }

    /// Build an authenticated client
    pub fn build_authenticated(
        self,
        token: impl Into<String>,
    ) -> Result<AuthenticatedSensoClient, ClientError> {
        Ok(self.build_public()?.authenticate(token))
    }
}

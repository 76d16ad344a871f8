//! Backend clients owned by the auth service

use crate::client_wrapper::WrappedAuthClient;
use crate::config::FrontendConfig;
pub use senso_http::ClientError;
use senso_http::{PublicSensoClient, TypedClientBuilder};
use std::cell::RefCell;
use std::rc::Rc;

/// The public client plus, while a session is active, a bearer-carrying one.
///
/// Only the auth service swaps the authenticated client; everything else reads it.
#[derive(Clone)]
pub struct ApiClients {
    public: PublicSensoClient,
    authenticated: Rc<RefCell<Option<WrappedAuthClient>>>,
}

impl ApiClients {
    pub fn new(config: &FrontendConfig) -> Result<Self, ClientError> {
        let public = TypedClientBuilder::new()
            .base_url(config.backend_url.clone())
            .build_public()?;
        Ok(Self::from_public(public))
    }

    pub fn from_public(public: PublicSensoClient) -> Self {
        Self {
            public,
            authenticated: Rc::new(RefCell::new(None)),
        }
    }

    /// Client for unauthenticated endpoints
    pub const fn public(&self) -> &PublicSensoClient {
        &self.public
    }

    /// Client for back-office endpoints, `None` while signed out
    pub fn authenticated(&self) -> Option<WrappedAuthClient> {
        self.authenticated.borrow().clone()
    }

    /// Send `token` as the bearer credential on all later authenticated calls.
    /// `on_auth_expired` runs when the backend rejects it.
    pub(crate) fn set_auth_token(&self, token: &str, on_auth_expired: Rc<dyn Fn()>) {
        let client = WrappedAuthClient::new(self.public.authenticate(token), on_auth_expired);
        *self.authenticated.borrow_mut() = Some(client);
    }

    /// Stop sending any bearer credential
    pub(crate) fn clear_auth_token(&self) {
        self.authenticated.borrow_mut().take();
    }
}

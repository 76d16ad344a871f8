pub mod auth;
pub mod client;
pub mod client_wrapper;
pub mod components;
pub mod config;
pub mod hooks;
pub mod logging;
pub mod timeout;

pub use auth::{AuthError, AuthService, AuthState, Capability, GuardDecision, SessionStore};
pub use client::ApiClients;
pub use client_wrapper::WrappedAuthClient;
pub use components::{AccessDenied, RouteGuard, Spinner};
pub use config::{AuthConfig, FrontendConfig};
pub use hooks::{use_auth_session, use_mounted, AuthSession};

//! Custom hooks for the application

pub mod use_auth_session;
pub mod use_mounted;

pub use use_auth_session::{use_auth_session, AuthSession};
pub use use_mounted::{use_mounted, Mounted};

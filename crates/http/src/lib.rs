//! Senso HTTP module providing the typed client for the registration backend
//!
//! The backend itself is an external collaborator; this crate only encodes its
//! REST contract (paths, payload shapes and error bodies) so the frontend can
//! talk to it without stringly-typed requests.

pub mod client;
pub mod types;

pub use client::{
    error::ClientError, AuthenticatedSensoClient, PublicSensoClient, TypedClientBuilder,
};

//! Authentication, session persistence and access control

pub mod credential;
pub mod error;
pub mod error_messages;
pub mod guard;
pub mod policy;
pub mod service;
pub mod state;
pub mod store;

pub use credential::{Credential, Role, Session, UserProfile};
pub use error::{AuthError, StorageError};
pub use guard::{decide, GuardDecision};
pub use policy::{can_access, is_admin, is_jurado, Capability};
pub use service::{AuthBackend, AuthService, AuthServiceBuilder, Clock, Subscription};
pub use state::AuthState;
pub use store::{BrowserStorage, KeyValueStorage, MemoryStorage, SessionStore};

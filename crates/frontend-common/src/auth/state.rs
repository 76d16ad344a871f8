//! In-memory session state

use super::credential::{Credential, Session, UserProfile};

/// Where the session state machine currently is.
///
/// `Unresolved` only exists until the first hydration pass; after that the
/// state is always `Anonymous` or `Authenticated`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthState {
    #[default]
    Unresolved,
    Anonymous,
    Authenticated(Session),
}

impl AuthState {
    pub const fn is_resolving(&self) -> bool {
        matches!(self, Self::Unresolved)
    }

    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    pub const fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn profile(&self) -> Option<&UserProfile> {
        self.session().map(|session| &session.profile)
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.session().map(|session| &session.credential)
    }
}

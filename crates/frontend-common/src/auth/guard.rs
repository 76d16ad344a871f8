//! Route-guard decision

use super::policy::Capability;
use super::state::AuthState;

/// What a guarded view should show for the current session
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Hydration has not finished; render a placeholder and do not redirect
    Loading,
    /// No session; replace the current history entry with the login view
    RedirectToLogin,
    /// Signed in without the required capability
    AccessDenied,
    Render,
}

/// Decide in order: loading, then redirect, then capability, then render.
pub fn decide(state: &AuthState, required: Option<&Capability>) -> GuardDecision {
    match state {
        AuthState::Unresolved => GuardDecision::Loading,
        AuthState::Anonymous => GuardDecision::RedirectToLogin,
        AuthState::Authenticated(session) => {
            if super::policy::can_access(Some(&session.profile), required) {
                GuardDecision::Render
            } else {
                GuardDecision::AccessDenied
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::credential::{Credential, Role, Session, UserProfile};

    fn signed_in(rol: Role) -> AuthState {
        AuthState::Authenticated(Session {
            credential: Credential::new("tok1"),
            profile: UserProfile {
                id: 7,
                nombre: "Jurado".into(),
                correo: None,
                rol,
            },
        })
    }

    #[test]
    fn loading_takes_priority() {
        assert_eq!(
            decide(&AuthState::Unresolved, Some(&Capability::Admin)),
            GuardDecision::Loading
        );
        assert_eq!(decide(&AuthState::Unresolved, None), GuardDecision::Loading);
    }

    #[test]
    fn anonymous_is_redirected() {
        assert_eq!(
            decide(&AuthState::Anonymous, Some(&Capability::Jurado)),
            GuardDecision::RedirectToLogin
        );
    }

    #[test]
    fn jurado_on_admin_route_is_denied_not_redirected() {
        assert_eq!(
            decide(&signed_in(Role::Jurado), Some(&Capability::Admin)),
            GuardDecision::AccessDenied
        );
    }

    #[test]
    fn participante_is_denied_back_office() {
        assert_eq!(
            decide(&signed_in(Role::Participante), Some(&Capability::Jurado)),
            GuardDecision::AccessDenied
        );
    }

    #[test]
    fn sufficient_role_renders() {
        assert_eq!(
            decide(&signed_in(Role::Admin), Some(&Capability::Jurado)),
            GuardDecision::Render
        );
        assert_eq!(
            decide(&signed_in(Role::Participante), None),
            GuardDecision::Render
        );
    }
}

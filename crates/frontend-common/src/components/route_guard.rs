//! Guard wrapping every protected view

use super::{AccessDenied, Spinner};
use crate::auth::{decide, AuthState, Capability, GuardDecision};
use yew::prelude::*;

#[derive(Properties, Clone, PartialEq)]
pub struct RouteGuardProps {
    pub state: AuthState,
    /// Capability the wrapped view needs; `None` admits any signed-in user
    #[prop_or_default]
    pub required: Option<Capability>,
    /// Navigate to the login view, replacing the current history entry
    pub on_unauthenticated: Callback<()>,
    #[prop_or_default]
    pub children: Html,
}

/// Renders its children only for a session holding `required`.
///
/// No redirect is issued while the session is still being restored.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let decision = decide(&props.state, props.required.as_ref());

    {
        let on_unauthenticated = props.on_unauthenticated.clone();
        use_effect_with(decision, move |decision| {
            if *decision == GuardDecision::RedirectToLogin {
                tracing::debug!("no session, redirecting to login");
                on_unauthenticated.emit(());
            }
        });
    }

    match decision {
        GuardDecision::Loading => html! { <Spinner text="Cargando..." /> },
        GuardDecision::RedirectToLogin => html! {},
        GuardDecision::AccessDenied => html! { <AccessDenied /> },
        GuardDecision::Render => props.children.clone(),
    }
}

//! Owning hook for the application's session

use crate::auth::{AuthService, AuthState};
use crate::config::{AuthConfig, FrontendConfig};
use gloo::timers::callback::Interval;
use yew::prelude::*;

/// The session handle passed explicitly to the guard and to views.
///
/// `state` is a render snapshot; `service` performs transitions.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthSession {
    pub service: AuthService,
    pub state: AuthState,
}

/// Create the session once, hydrate it after the first render and keep a
/// snapshot of its state in component state.
///
/// While signed in the credential expiry is re-checked every
/// `AuthConfig::TOKEN_CHECK_INTERVAL_MS`.
#[hook]
pub fn use_auth_session(config: FrontendConfig) -> Result<AuthSession, String> {
    let service = use_memo((), move |_| {
        AuthService::new(&config).map_err(|err| {
            tracing::error!(error = %err, "failed to build backend client");
            format!("No se pudo configurar el cliente: {err}")
        })
    });
    let service: Result<AuthService, String> = (*service).clone();
    let state = use_state(AuthState::default);

    {
        let service = service.clone().ok();
        let state = state.clone();
        use_effect_with((), move |_| {
            let subscription = service.map(|service| {
                let setter = state.setter();
                let subscription = service.subscribe(move |next| setter.set(next.clone()));
                state.set(service.hydrate());
                subscription
            });
            move || drop(subscription)
        });
    }

    {
        let service = service.clone().ok();
        use_effect_with(state.is_authenticated(), move |authenticated| {
            let interval = service.filter(|_| *authenticated).map(|service| {
                Interval::new(AuthConfig::TOKEN_CHECK_INTERVAL_MS, move || {
                    service.revalidate();
                })
            });
            move || drop(interval)
        });
    }

    service.map(|service| AuthSession {
        service,
        state: (*state).clone(),
    })
}

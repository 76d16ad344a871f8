//! Back-office sign-in form

use crate::app::PanelRoute;
use senso_frontend_common::{use_mounted, AuthSession};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoginPageProps {
    pub session: AuthSession,
}

#[function_component(LoginPage)]
pub fn login_page(props: &LoginPageProps) -> Html {
    let navigator = use_navigator();
    let mounted = use_mounted();
    let correo = use_state(String::new);
    let contrasena = use_state(String::new);
    let error = use_state(|| None::<String>);
    let submitting = use_state(|| false);

    // Already signed in: go straight to the panel
    {
        let navigator = navigator.clone();
        use_effect_with(props.session.state.is_authenticated(), move |authenticated| {
            if *authenticated {
                if let Some(navigator) = &navigator {
                    navigator.replace(&PanelRoute::Dashboard);
                }
            }
        });
    }

    let on_correo = {
        let correo = correo.clone();
        Callback::from(move |e: InputEvent| correo.set(super::input_value(&e)))
    };

    let on_contrasena = {
        let contrasena = contrasena.clone();
        Callback::from(move |e: InputEvent| contrasena.set(super::input_value(&e)))
    };

    let onsubmit = {
        let service = props.session.service.clone();
        let correo = correo.clone();
        let contrasena = contrasena.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let service = service.clone();
            let navigator = navigator.clone();
            let mounted = mounted.clone();
            let correo = (*correo).clone();
            let contrasena = (*contrasena).clone();
            let error = error.clone();
            let submitting = submitting.clone();

            spawn_local(async move {
                let result = service.login(&correo, &contrasena).await;
                if !mounted.get() {
                    tracing::debug!("login view gone, discarding result");
                    return;
                }
                submitting.set(false);
                match result {
                    Ok(_) => {
                        if let Some(navigator) = &navigator {
                            navigator.replace(&PanelRoute::Dashboard);
                        }
                    }
                    Err(err) => error.set(Some(err.message().to_string())),
                }
            });
        })
    };

    let busy = *submitting || props.session.service.login_in_progress();

    html! {
        <div class="min-h-screen bg-black flex items-center justify-center px-4">
            <div class="max-w-md w-full bg-gray-900 border border-yellow-400/20 rounded-xl p-8">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-yellow-400">{"KARAOKE SENSŌ"}</h1>
                    <p class="text-gray-400">{"Panel de Administración"}</p>
                </div>

                if let Some(message) = &*error {
                    <div class="mb-4 p-3 bg-red-600/20 border border-red-600/30 text-red-300 rounded text-sm">
                        {message}
                    </div>
                }

                <form {onsubmit} class="space-y-4">
                    <div>
                        <label for="correo" class="block text-sm font-medium text-gray-300 mb-2">{"Correo Electrónico"}</label>
                        <input
                            id="correo"
                            type="email"
                            required=true
                            class="w-full px-3 py-2 bg-gray-800 border border-gray-700 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-yellow-400"
                            placeholder="admin@karaokesenso.com"
                            value={(*correo).clone()}
                            oninput={on_correo}
                        />
                    </div>
                    <div>
                        <label for="contrasena" class="block text-sm font-medium text-gray-300 mb-2">{"Contraseña"}</label>
                        <input
                            id="contrasena"
                            type="password"
                            required=true
                            class="w-full px-3 py-2 bg-gray-800 border border-gray-700 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-yellow-400"
                            value={(*contrasena).clone()}
                            oninput={on_contrasena}
                        />
                    </div>
                    <button
                        type="submit"
                        disabled={busy}
                        class="w-full py-2 bg-yellow-400 text-black font-bold rounded-lg hover:bg-yellow-500 transition-colors disabled:opacity-50 disabled:cursor-not-allowed"
                    >
                        { if busy { "Iniciando sesión..." } else { "Iniciar Sesión" } }
                    </button>
                </form>
            </div>
        </div>
    }
}

//! Public landing page: counters and the sign-up form

use senso_frontend_common::AuthSession;
use senso_http::types::{Category, NewRegistration, PublicStatistics};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;

const SUCCESS_MESSAGE: &str = "¡Inscripción exitosa! Revisa tu correo para más información.";
const FAILURE_MESSAGE: &str = "Error al enviar inscripción. Por favor intenta nuevamente.";

#[derive(Properties, PartialEq)]
pub struct LandingProps {
    pub session: AuthSession,
}

#[derive(Clone, Default, PartialEq)]
struct FormFields {
    nombre_completo: String,
    nombre_artistico: String,
    telefono: String,
    correo: String,
    categoria: Category,
    municipio: String,
    sede: String,
}

impl FormFields {
    fn to_request(&self) -> NewRegistration {
        NewRegistration {
            nombre_completo: self.nombre_completo.trim().to_string(),
            nombre_artistico: self.nombre_artistico.trim().to_string(),
            telefono: self.telefono.trim().to_string(),
            correo: super::non_blank(&self.correo),
            categoria: self.categoria,
            municipio: self.municipio.trim().to_string(),
            sede: super::non_blank(&self.sede),
        }
    }
}

#[function_component(Landing)]
pub fn landing(props: &LandingProps) -> Html {
    let stats = use_state(PublicStatistics::default);
    let form = use_state(FormFields::default);
    let form_visible = use_state(|| false);
    let sending = use_state(|| false);
    let message = use_state(|| None::<&'static str>);
    // Bumped after a successful sign-up so the counters are reloaded
    let stats_generation = use_state(|| 0_u32);

    {
        let client = props.session.service.public_client();
        let stats = stats.clone();
        use_effect_with(*stats_generation, move |_| {
            spawn_local(async move {
                match client.public_statistics().await {
                    Ok(loaded) => stats.set(loaded),
                    Err(err) => tracing::warn!(error = %err, "failed to load public statistics"),
                }
            });
        });
    }

    let toggle_form = {
        let form_visible = form_visible.clone();
        Callback::from(move |_: MouseEvent| form_visible.set(!*form_visible))
    };

    let text_field = |update: fn(&mut FormFields, String)| {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let mut next = (*form).clone();
            update(&mut next, super::input_value(&e));
            form.set(next);
        })
    };

    let on_categoria = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let mut next = (*form).clone();
            next.categoria = Category::parse(&super::select_value(&e)).unwrap_or_default();
            form.set(next);
        })
    };

    let onsubmit = {
        let client = props.session.service.public_client();
        let form = form.clone();
        let form_visible = form_visible.clone();
        let sending = sending.clone();
        let message = message.clone();
        let stats_generation = stats_generation.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }
            sending.set(true);
            message.set(None);

            let client = client.clone();
            let request = form.to_request();
            let form = form.clone();
            let form_visible = form_visible.clone();
            let sending = sending.clone();
            let message = message.clone();
            let stats_generation = stats_generation.clone();

            spawn_local(async move {
                match client.create_registration(&request).await {
                    Ok(created) => {
                        tracing::info!(id = %created.id, "registration submitted");
                        message.set(Some(SUCCESS_MESSAGE));
                        form.set(FormFields::default());
                        form_visible.set(false);
                        stats_generation.set(*stats_generation + 1);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, "registration failed");
                        message.set(Some(FAILURE_MESSAGE));
                    }
                }
                sending.set(false);
            });
        })
    };

    let input_class = "w-full px-3 py-2 bg-gray-800 border border-gray-700 rounded-lg text-white focus:outline-none focus:ring-2 focus:ring-yellow-400";

    html! {
        <div class="min-h-screen bg-black text-white">
            <section class="py-20 text-center px-4">
                <h1 class="text-5xl font-bold text-yellow-400">{"KARAOKE SENSŌ"}</h1>
                <p class="text-2xl text-gray-400 mt-2">{"戦争"}</p>
                <h2 class="text-xl italic mt-6 max-w-2xl mx-auto">
                    {"\"Una declaración de guerra contra todo aquello que nos deshumaniza.\""}
                </h2>
                <button onclick={toggle_form} class="mt-8 px-8 py-3 bg-yellow-400 text-black font-bold rounded-lg hover:bg-yellow-500">
                    {"INSCRÍBETE AHORA"}
                </button>
            </section>

            <section class="grid grid-cols-1 md:grid-cols-3 gap-6 max-w-4xl mx-auto px-4">
                { counter("Inscritos", stats.total_inscritos) }
                { counter("Municipios", stats.total_municipios) }
                { counter("Votos", stats.total_votos) }
            </section>

            if let Some(text) = *message {
                <p class="text-center mt-8 text-yellow-300">{text}</p>
            }

            if *form_visible {
                <section class="max-w-xl mx-auto px-4 py-10">
                    <form {onsubmit} class="space-y-4 bg-gray-900 border border-yellow-400/20 rounded-xl p-6">
                        <input class={input_class} placeholder="Nombre completo" required=true
                            value={form.nombre_completo.clone()}
                            oninput={text_field(|f, v| f.nombre_completo = v)} />
                        <input class={input_class} placeholder="Nombre artístico" required=true
                            value={form.nombre_artistico.clone()}
                            oninput={text_field(|f, v| f.nombre_artistico = v)} />
                        <input class={input_class} type="tel" placeholder="Teléfono" required=true
                            value={form.telefono.clone()}
                            oninput={text_field(|f, v| f.telefono = v)} />
                        <input class={input_class} type="email" placeholder="Correo (opcional)"
                            value={form.correo.clone()}
                            oninput={text_field(|f, v| f.correo = v)} />
                        <select class={input_class} onchange={on_categoria}>
                            { for Category::ALL.into_iter().map(|category| html! {
                                <option value={category.as_str()} selected={form.categoria == category}>
                                    {category.as_str()}
                                </option>
                            }) }
                        </select>
                        <input class={input_class} placeholder="Municipio" required=true
                            value={form.municipio.clone()}
                            oninput={text_field(|f, v| f.municipio = v)} />
                        <input class={input_class} placeholder="Sede (opcional)"
                            value={form.sede.clone()}
                            oninput={text_field(|f, v| f.sede = v)} />
                        <button type="submit" disabled={*sending}
                            class="w-full py-3 bg-yellow-400 text-black font-bold rounded-lg disabled:opacity-50">
                            { if *sending { "Enviando..." } else { "Enviar inscripción" } }
                        </button>
                    </form>
                </section>
            }

            <footer class="text-center py-10 text-sm text-gray-500">
                <Link<Route> to={Route::AdminLogin} classes="hover:text-yellow-400">{"Acceso administrativo"}</Link<Route>>
            </footer>
        </div>
    }
}

fn counter(label: &'static str, value: u64) -> Html {
    html! {
        <div class="bg-gray-900 border border-yellow-400/20 rounded-xl p-6 text-center">
            <p class="text-4xl font-bold text-yellow-400">{value}</p>
            <p class="text-gray-400 mt-2">{label}</p>
        </div>
    }
}

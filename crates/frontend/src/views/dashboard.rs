//! Back-office statistics overview

use senso_frontend_common::auth::error_messages::user_message;
use senso_frontend_common::{AuthSession, Spinner};
use senso_http::types::AdminStatistics;
use std::collections::BTreeMap;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub session: AuthSession,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let stats = use_state(|| None::<AdminStatistics>);
    let error = use_state(|| None::<String>);

    {
        let client = props.session.service.authenticated_client();
        let stats = stats.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            match client {
                Some(client) => spawn_local(async move {
                    match client.admin_statistics().await {
                        Ok(loaded) => stats.set(Some(loaded)),
                        Err(err) => {
                            tracing::error!(error = %err, "failed to load admin statistics");
                            error.set(Some(user_message(&err)));
                        }
                    }
                }),
                None => error.set(Some("No hay una sesión activa.".to_string())),
            }
        });
    }

    if let Some(message) = &*error {
        return html! { <p class="text-red-400">{message}</p> };
    }

    let Some(stats) = &*stats else {
        return html! { <Spinner text="Cargando estadísticas..." /> };
    };

    let cards = [
        ("Total Inscritos", stats.total_inscritos),
        ("Pendientes", stats.inscritos_pendientes),
        ("Aprobados", stats.inscritos_aprobados),
        ("Rechazados", stats.inscritos_rechazados),
        ("Sedes", stats.total_sedes),
        ("Rondas", stats.total_rondas),
        ("Videos Subidos", stats.videos_subidos),
        ("Videos Aprobados", stats.videos_aprobados),
    ];

    html! {
        <div class="space-y-6">
            <div>
                <h1 class="text-3xl font-bold text-yellow-400">{"Dashboard"}</h1>
                <p class="text-gray-400">{"Resumen general del concurso"}</p>
            </div>

            <div class="grid grid-cols-2 md:grid-cols-4 gap-4">
                { for cards.iter().map(|(label, value)| html! {
                    <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                        <p class="text-sm text-gray-400">{*label}</p>
                        <p class="text-2xl font-bold text-white">{*value}</p>
                    </div>
                }) }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                { breakdown("Inscritos por Categoría", &stats.inscritos_por_categoria) }
                { breakdown("Inscritos por Sede", &stats.inscritos_por_sede) }
            </div>
        </div>
    }
}

fn breakdown(title: &str, counts: &BTreeMap<String, u64>) -> Html {
    let max = counts.values().copied().max().unwrap_or(0);

    html! {
        <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
            <h2 class="text-lg font-semibold text-yellow-400 mb-4">{title.to_string()}</h2>
            if counts.is_empty() {
                <p class="text-sm text-gray-500">{"Sin datos"}</p>
            }
            { for counts.iter().map(|(label, count)| html! {
                <div class="mb-3">
                    <div class="flex justify-between text-sm text-gray-300 mb-1">
                        <span>{label.clone()}</span>
                        <span>{*count}</span>
                    </div>
                    <div class="w-full h-2 bg-gray-700 rounded-full">
                        <div
                            class="h-2 bg-yellow-400 rounded-full"
                            style={format!("width: {}%", bar_percent(*count, max))}
                        ></div>
                    </div>
                </div>
            }) }
        </div>
    }
}

/// Width of a bar relative to the largest value, in whole percent
fn bar_percent(value: u64, max: u64) -> u64 {
    if max == 0 {
        return 0;
    }
    (value.min(max) * 100) / max
}

#[cfg(test)]
mod tests {
    use super::bar_percent;

    #[test]
    fn bars_scale_to_largest() {
        assert_eq!(bar_percent(5, 10), 50);
        assert_eq!(bar_percent(10, 10), 100);
        assert_eq!(bar_percent(0, 0), 0);
        assert_eq!(bar_percent(1, 3), 33);
    }
}

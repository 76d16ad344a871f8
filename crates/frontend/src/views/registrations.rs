//! Registration review: filters, table, detail panel and status changes

use senso_frontend_common::auth::error_messages::user_message;
use senso_frontend_common::{AuthSession, Spinner};
use senso_http::types::{
    Category, Registration, RegistrationFilter, RegistrationStatus, StatusUpdate,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegistrationsProps {
    pub session: AuthSession,
}

#[function_component(Registrations)]
pub fn registrations(props: &RegistrationsProps) -> Html {
    let rows = use_state(Vec::<Registration>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let estatus = use_state(|| None::<RegistrationStatus>);
    let categoria = use_state(|| None::<Category>);
    let search = use_state(String::new);
    let applied_search = use_state(|| None::<String>);
    let selected = use_state(|| None::<Registration>);
    let observaciones = use_state(String::new);
    // Bumped after every status change to force a re-fetch
    let generation = use_state(|| 0_u32);

    {
        let client = props.session.service.authenticated_client();
        let rows = rows.clone();
        let loading = loading.clone();
        let error = error.clone();
        let filter = RegistrationFilter {
            estatus: *estatus,
            categoria: *categoria,
            search: (*applied_search).clone(),
        };
        use_effect_with((filter, *generation), move |(filter, _)| {
            let filter = filter.clone();
            loading.set(true);
            match client {
                Some(client) => spawn_local(async move {
                    match client.list_registrations(&filter).await {
                        Ok(list) => {
                            rows.set(list);
                            error.set(None);
                        }
                        Err(err) => {
                            tracing::error!(error = %err, "failed to list registrations");
                            error.set(Some(user_message(&err)));
                        }
                    }
                    loading.set(false);
                }),
                None => {
                    error.set(Some("No hay una sesión activa.".to_string()));
                    loading.set(false);
                }
            }
        });
    }

    let change_status = {
        let service = props.session.service.clone();
        let error = error.clone();
        let selected = selected.clone();
        let observaciones = observaciones.clone();
        let generation = generation.clone();
        Callback::from(move |(id, new_status): (String, RegistrationStatus)| {
            let Some(client) = service.authenticated_client() else {
                return;
            };
            let update = StatusUpdate {
                estatus: new_status,
                observaciones: (*observaciones).clone(),
            };
            let error = error.clone();
            let selected = selected.clone();
            let observaciones = observaciones.clone();
            let generation = generation.clone();
            spawn_local(async move {
                match client.update_registration_status(&id, &update).await {
                    Ok(()) => {
                        tracing::info!(id = %id, estatus = new_status.as_str(), "registration status updated");
                        selected.set(None);
                        observaciones.set(String::new());
                        generation.set(*generation + 1);
                    }
                    Err(err) => {
                        tracing::error!(error = %err, id = %id, "failed to update registration status");
                        error.set(Some(format!(
                            "Error al actualizar el estatus: {}",
                            user_message(&err)
                        )));
                    }
                }
            });
        })
    };

    let on_search = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| search.set(super::input_value(&e)))
    };

    let on_estatus = {
        let estatus = estatus.clone();
        Callback::from(move |e: Event| estatus.set(RegistrationStatus::parse(&super::select_value(&e))))
    };

    let on_categoria = {
        let categoria = categoria.clone();
        Callback::from(move |e: Event| categoria.set(Category::parse(&super::select_value(&e))))
    };

    let on_filter = {
        let search = search.clone();
        let applied_search = applied_search.clone();
        Callback::from(move |_: MouseEvent| applied_search.set(super::non_blank(&search)))
    };

    let table = if *loading {
        html! { <Spinner text="Cargando inscripciones..." /> }
    } else {
        html! {
            <div class="bg-gray-800 rounded-xl border border-gray-700 overflow-x-auto">
                <table class="w-full">
                    <thead class="bg-gray-900 border-b border-gray-700">
                        <tr>
                            { for ["Participante", "Contacto", "Categoría", "Ubicación", "Estatus", "Fecha", "Acciones"]
                                .iter()
                                .map(|heading| html! {
                                    <th class="px-6 py-3 text-left text-xs font-medium text-gray-400 uppercase">{*heading}</th>
                                }) }
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-gray-700">
                        { for rows.iter().map(|row| registration_row(row, &selected, &change_status)) }
                    </tbody>
                </table>
            </div>
        }
    };

    html! {
        <div class="space-y-6">
            <div class="flex flex-col md:flex-row md:items-center md:justify-between">
                <div>
                    <h1 class="text-3xl font-bold text-yellow-400">{"Inscripciones"}</h1>
                    <p class="text-gray-400">{"Gestionar participantes del concurso"}</p>
                </div>
                <div class="mt-4 md:mt-0 text-sm text-gray-400">
                    {format!("Total: {} inscripciones", rows.len())}
                </div>
            </div>

            if let Some(message) = &*error {
                <div class="p-3 bg-red-600/20 border border-red-600/30 text-red-300 rounded text-sm">{message}</div>
            }

            <div class="bg-gray-800 rounded-xl p-4 border border-gray-700 flex flex-col md:flex-row gap-4">
                <input
                    type="text"
                    class="flex-1 px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white"
                    placeholder="Buscar por nombre, teléfono o correo..."
                    value={(*search).clone()}
                    oninput={on_search}
                />
                <select onchange={on_estatus} class="px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white">
                    <option value="" selected={estatus.is_none()}>{"Todos los estatus"}</option>
                    { for RegistrationStatus::ALL.into_iter().map(|status| html! {
                        <option value={status.as_str()} selected={*estatus == Some(status)}>{status_label(status)}</option>
                    }) }
                </select>
                <select onchange={on_categoria} class="px-4 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white">
                    <option value="" selected={categoria.is_none()}>{"Todas las categorías"}</option>
                    { for Category::ALL.into_iter().map(|category| html! {
                        <option value={category.as_str()} selected={*categoria == Some(category)}>{category.as_str()}</option>
                    }) }
                </select>
                <button onclick={on_filter} class="px-4 py-2 bg-yellow-400 text-black rounded-lg font-medium">
                    {"Filtrar"}
                </button>
            </div>

            {table}

            if let Some(registration) = &*selected {
                { detail_panel(registration, &selected, &observaciones, &change_status) }
            }
        </div>
    }
}

fn registration_row(
    row: &Registration,
    selected: &UseStateHandle<Option<Registration>>,
    change_status: &Callback<(String, RegistrationStatus)>,
) -> Html {
    let on_view = {
        let selected = selected.clone();
        let row = row.clone();
        Callback::from(move |_: MouseEvent| selected.set(Some(row.clone())))
    };
    let on_approve = {
        let id = row.id.clone();
        change_status.reform(move |_: MouseEvent| (id.clone(), RegistrationStatus::Aprobado))
    };
    let on_reject = {
        let id = row.id.clone();
        change_status.reform(move |_: MouseEvent| (id.clone(), RegistrationStatus::Rechazado))
    };

    html! {
        <tr key={row.id.clone()} class="hover:bg-gray-700/50">
            <td class="px-6 py-4">
                <div class="font-medium text-white">{row.nombre_completo.clone()}</div>
                <div class="text-sm text-gray-400">{format!("\"{}\"", row.nombre_artistico)}</div>
            </td>
            <td class="px-6 py-4 text-sm">
                <div class="text-gray-300">{row.telefono.clone()}</div>
                if let Some(correo) = &row.correo {
                    <div class="text-gray-400">{correo.clone()}</div>
                }
            </td>
            <td class="px-6 py-4">
                <span class="px-2 py-1 text-xs font-medium bg-blue-400/20 text-blue-400 rounded-full">
                    {row.categoria.as_str()}
                </span>
            </td>
            <td class="px-6 py-4 text-sm">
                <div class="text-gray-300">{row.municipio.clone()}</div>
                if let Some(sede) = &row.sede {
                    <div class="text-xs text-gray-400">{sede.clone()}</div>
                }
            </td>
            <td class="px-6 py-4">{status_badge(row.estatus)}</td>
            <td class="px-6 py-4 text-sm text-gray-400">{display_date(row.fecha_inscripcion.as_deref())}</td>
            <td class="px-6 py-4 space-x-2">
                <button onclick={on_view} class="text-blue-400 hover:text-blue-300">{"Ver"}</button>
                if row.estatus == RegistrationStatus::Pendiente {
                    <button onclick={on_approve} class="text-green-400 hover:text-green-300">{"Aprobar"}</button>
                    <button onclick={on_reject} class="text-red-400 hover:text-red-300">{"Rechazar"}</button>
                }
            </td>
        </tr>
    }
}

fn detail_panel(
    registration: &Registration,
    selected: &UseStateHandle<Option<Registration>>,
    observaciones: &UseStateHandle<String>,
    change_status: &Callback<(String, RegistrationStatus)>,
) -> Html {
    let on_close = {
        let selected = selected.clone();
        Callback::from(move |_: MouseEvent| selected.set(None))
    };
    let on_observaciones = {
        let observaciones = observaciones.clone();
        Callback::from(move |e: InputEvent| observaciones.set(super::textarea_value(&e)))
    };
    let on_approve = {
        let id = registration.id.clone();
        change_status.reform(move |_: MouseEvent| (id.clone(), RegistrationStatus::Aprobado))
    };
    let on_reject = {
        let id = registration.id.clone();
        change_status.reform(move |_: MouseEvent| (id.clone(), RegistrationStatus::Rechazado))
    };

    let fields = [
        ("Nombre Completo", registration.nombre_completo.clone()),
        ("Nombre Artístico", format!("\"{}\"", registration.nombre_artistico)),
        ("Teléfono", registration.telefono.clone()),
        (
            "Correo",
            registration
                .correo
                .clone()
                .unwrap_or_else(|| "No proporcionado".to_string()),
        ),
        ("Categoría", registration.categoria.as_str().to_string()),
        ("Municipio", registration.municipio.clone()),
        (
            "Sede",
            registration
                .sede
                .clone()
                .unwrap_or_else(|| "Sin asignar".to_string()),
        ),
    ];

    html! {
        <div class="fixed inset-0 bg-black/50 flex items-center justify-center z-50 p-4">
            <div class="bg-gray-800 rounded-xl max-w-2xl w-full p-6 space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-yellow-400">{"Detalles de Inscripción"}</h2>
                    <button onclick={on_close} class="text-gray-400 hover:text-white">{"✕"}</button>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 gap-4">
                    { for fields.into_iter().map(|(label, value)| html! {
                        <div>
                            <label class="block text-sm font-medium text-gray-400 mb-1">{label}</label>
                            <p class="text-white">{value}</p>
                        </div>
                    }) }
                </div>

                <div>
                    <label class="block text-sm font-medium text-gray-400 mb-2">{"Estatus Actual"}</label>
                    {status_badge(registration.estatus)}
                    if let Some(notes) = &registration.observaciones {
                        <p class="mt-2 text-sm text-gray-300">{notes.clone()}</p>
                    }
                </div>

                if registration.estatus == RegistrationStatus::Pendiente {
                    <div class="space-y-3">
                        <textarea
                            class="w-full px-3 py-2 bg-gray-700 border border-gray-600 rounded-lg text-white"
                            placeholder="Observaciones (opcional)"
                            value={(**observaciones).clone()}
                            oninput={on_observaciones}
                        />
                        <div class="flex gap-3">
                            <button onclick={on_approve} class="flex-1 py-2 bg-green-600 hover:bg-green-700 rounded-lg">{"Aprobar"}</button>
                            <button onclick={on_reject} class="flex-1 py-2 bg-red-600 hover:bg-red-700 rounded-lg">{"Rechazar"}</button>
                        </div>
                    </div>
                }
            </div>
        </div>
    }
}

const fn status_label(status: RegistrationStatus) -> &'static str {
    match status {
        RegistrationStatus::Pendiente => "Pendiente",
        RegistrationStatus::Aprobado => "Aprobado",
        RegistrationStatus::Rechazado => "Rechazado",
    }
}

fn status_badge(status: RegistrationStatus) -> Html {
    let classes = match status {
        RegistrationStatus::Pendiente => "bg-yellow-400/20 border-yellow-400/30 text-yellow-400",
        RegistrationStatus::Aprobado => "bg-green-400/20 border-green-400/30 text-green-400",
        RegistrationStatus::Rechazado => "bg-red-400/20 border-red-400/30 text-red-400",
    };
    html! {
        <span class={classes!("inline-flex", "px-2", "py-1", "rounded-full", "text-xs", "font-medium", "border", classes)}>
            {status_label(status)}
        </span>
    }
}

/// Date part of the backend's ISO timestamp
fn display_date(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(|timestamp| timestamp.split('T').next())
        .filter(|date| !date.is_empty())
        .unwrap_or("-")
        .to_string()
}

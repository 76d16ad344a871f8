//! Back-office chrome: header, capability-filtered sidebar and logout

use crate::app::{PanelRoute, Route};
use senso_frontend_common::AuthSession;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AdminLayoutProps {
    pub session: AuthSession,
    #[prop_or_default]
    pub children: Html,
}

#[function_component(AdminLayout)]
pub fn admin_layout(props: &AdminLayoutProps) -> Html {
    let navigator = use_navigator();
    let current = use_route::<PanelRoute>();
    let sidebar_open = use_state(|| false);

    let on_logout = {
        let service = props.session.service.clone();
        Callback::from(move |_: MouseEvent| {
            service.logout();
            if let Some(navigator) = &navigator {
                navigator.replace(&Route::AdminLogin);
            }
        })
    };

    let toggle_sidebar = {
        let sidebar_open = sidebar_open.clone();
        Callback::from(move |_: MouseEvent| sidebar_open.set(!*sidebar_open))
    };

    let profile = props.session.state.profile();
    let nombre = profile.map(|profile| profile.nombre.clone()).unwrap_or_default();
    let rol = profile.map(|profile| profile.rol.to_string()).unwrap_or_default();

    let menu = PanelRoute::MENU
        .into_iter()
        .filter(|section| props.session.service.can_access(section.required().as_ref()))
        .map(|section| {
            let active = current == Some(section);
            let classes = if active {
                "block px-4 py-3 rounded-lg bg-yellow-400/10 text-yellow-400"
            } else {
                "block px-4 py-3 rounded-lg text-gray-300 hover:bg-gray-800"
            };
            html! {
                <Link<PanelRoute> to={section} classes={classes}>
                    <div class="font-medium">{section.title()}</div>
                    <div class="text-xs text-gray-500">{section.description()}</div>
                </Link<PanelRoute>>
            }
        });

    let aside_classes = if *sidebar_open {
        "translate-x-0 fixed md:static inset-y-0 left-0 z-50 w-64 bg-gray-900 border-r border-yellow-400/20"
    } else {
        "-translate-x-full md:translate-x-0 fixed md:static inset-y-0 left-0 z-50 w-64 bg-gray-900 border-r border-yellow-400/20"
    };

    html! {
        <div class="min-h-screen bg-black text-white">
            <header class="bg-gray-900 border-b border-yellow-400/20 px-4 py-3 flex items-center justify-between">
                <div class="flex items-center">
                    <button onclick={toggle_sidebar} class="md:hidden mr-3 p-2 rounded-lg hover:bg-yellow-400/10">
                        { if *sidebar_open { "✕" } else { "☰" } }
                    </button>
                    <div>
                        <h1 class="text-xl font-bold text-yellow-400">{"KARAOKE SENSŌ"}</h1>
                        <p class="text-sm text-gray-400">{"Panel de Administración"}</p>
                    </div>
                </div>
                <div class="flex items-center space-x-4">
                    <div class="text-right hidden sm:block">
                        <p class="text-sm font-medium">{nombre}</p>
                        <p class="text-xs text-gray-400 capitalize">{rol}</p>
                    </div>
                    <button
                        onclick={on_logout}
                        class="px-3 py-2 text-sm bg-red-600/20 hover:bg-red-600/30 border border-red-600/30 rounded-lg"
                    >
                        {"Salir"}
                    </button>
                </div>
            </header>

            <div class="flex">
                <aside class={aside_classes}>
                    <nav class="p-4 space-y-2 mt-4">
                        { for menu }
                    </nav>
                </aside>
                <main class="flex-1 p-6">
                    {props.children.clone()}
                </main>
            </div>
        </div>
    }
}

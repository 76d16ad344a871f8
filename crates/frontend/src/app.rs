use crate::views::{AdminLayout, Dashboard, Landing, LoginPage, Placeholder, Registrations};
use senso_frontend_common::auth::Capability;
use senso_frontend_common::{use_auth_session, AuthSession, FrontendConfig, RouteGuard};
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/admin/login")]
    AdminLogin,
    #[at("/admin/panel")]
    PanelRoot,
    #[at("/admin/panel/*")]
    Panel,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Sections of the back-office panel
#[derive(Clone, Copy, Routable, PartialEq, Eq, Debug)]
pub enum PanelRoute {
    #[at("/admin/panel/dashboard")]
    Dashboard,
    #[at("/admin/panel/inscripciones")]
    Inscripciones,
    #[at("/admin/panel/sedes")]
    Sedes,
    #[at("/admin/panel/rondas")]
    Rondas,
    #[at("/admin/panel/resultados")]
    Resultados,
    #[at("/admin/panel/videos")]
    Videos,
    #[at("/admin/panel/reportes")]
    Reportes,
    #[not_found]
    #[at("/admin/panel/404")]
    NotFound,
}

impl PanelRoute {
    /// Sidebar entries in display order
    pub const MENU: [Self; 7] = [
        Self::Dashboard,
        Self::Inscripciones,
        Self::Sedes,
        Self::Rondas,
        Self::Resultados,
        Self::Videos,
        Self::Reportes,
    ];

    /// Capability needed on top of the panel-wide `jurado`.
    ///
    /// Restricting `Sedes` and `Reportes` to administrators is a policy of this
    /// frontend; every other section stays open to `jurado`.
    pub const fn required(self) -> Option<Capability> {
        match self {
            Self::Sedes | Self::Reportes => Some(Capability::Admin),
            _ => None,
        }
    }

    pub const fn title(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Inscripciones => "Inscripciones",
            Self::Sedes => "Sedes",
            Self::Rondas => "Rondas",
            Self::Resultados => "Resultados",
            Self::Videos => "Videos",
            Self::Reportes => "Reportes",
            Self::NotFound => "",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Self::Dashboard => "Resumen general",
            Self::Inscripciones => "Gestionar participantes",
            Self::Sedes => "Control de ubicaciones",
            Self::Rondas => "Gestión de competencias",
            Self::Resultados => "Cargar calificaciones",
            Self::Videos => "Revisión de contenido",
            Self::Reportes => "Estadísticas y análisis",
            Self::NotFound => "",
        }
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let session = use_auth_session(FrontendConfig::from_env());

    match session {
        Ok(session) => html! {
            <BrowserRouter>
                <Switch<Route> render={move |route| switch(route, &session)} />
            </BrowserRouter>
        },
        Err(message) => html! {
            <div class="min-h-screen flex items-center justify-center bg-black text-red-400">
                <p>{message}</p>
            </div>
        },
    }
}

fn switch(route: Route, session: &AuthSession) -> Html {
    match route {
        Route::Home => html! { <Landing session={session.clone()} /> },
        Route::AdminLogin => html! { <LoginPage session={session.clone()} /> },
        Route::PanelRoot => html! {
            <PanelGate session={session.clone()} required={Capability::Jurado}>
                <Redirect<PanelRoute> to={PanelRoute::Dashboard} />
            </PanelGate>
        },
        Route::Panel => {
            let inner = session.clone();
            html! {
                <PanelGate session={session.clone()} required={Capability::Jurado}>
                    <AdminLayout session={session.clone()}>
                        <Switch<PanelRoute> render={move |route| switch_panel(route, &inner)} />
                    </AdminLayout>
                </PanelGate>
            }
        }
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

fn switch_panel(route: PanelRoute, session: &AuthSession) -> Html {
    let view = match route {
        PanelRoute::Dashboard => html! { <Dashboard session={session.clone()} /> },
        PanelRoute::Inscripciones => html! { <Registrations session={session.clone()} /> },
        PanelRoute::NotFound => return html! { <Redirect<Route> to={Route::Home} /> },
        section => html! {
            <Placeholder title={section.title()} description={section.description()} />
        },
    };

    match route.required() {
        Some(required) => html! {
            <PanelGate session={session.clone()} {required}>{view}</PanelGate>
        },
        None => view,
    }
}

#[derive(Properties, PartialEq)]
struct PanelGateProps {
    session: AuthSession,
    required: Capability,
    #[prop_or_default]
    children: Html,
}

/// Route guard that sends anonymous visitors to the login view.
///
/// The redirect uses `Navigator::replace`, not `push`, so the guarded URL is
/// not left in history and "back" from the login view does not bounce into
/// another redirect.
#[function_component(PanelGate)]
fn panel_gate(props: &PanelGateProps) -> Html {
    let navigator = use_navigator();
    let on_unauthenticated = Callback::from(move |()| {
        if let Some(navigator) = &navigator {
            navigator.replace(&Route::AdminLogin);
        }
    });

    html! {
        <RouteGuard
            state={props.session.state.clone()}
            required={props.required.clone()}
            {on_unauthenticated}
        >
            {props.children.clone()}
        </RouteGuard>
    }
}

mod app;
mod views;

use app::App;

fn main() {
    senso_frontend_common::logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "starting senso frontend");
    yew::Renderer::<App>::new().render();
}

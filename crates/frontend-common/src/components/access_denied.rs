//! Terminal view for a signed-in user lacking a capability

use yew::prelude::*;

#[function_component(AccessDenied)]
pub fn access_denied() -> Html {
    html! {
        <div class="min-h-screen flex items-center justify-center bg-gray-100">
            <div class="bg-white rounded-lg shadow-md p-8 max-w-md text-center">
                <h2 class="text-2xl font-bold text-red-600 mb-4">{"Acceso Denegado"}</h2>
                <p class="text-gray-600">{"No tienes permisos para acceder a esta sección."}</p>
            </div>
        </div>
    }
}

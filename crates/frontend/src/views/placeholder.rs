use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlaceholderProps {
    pub title: AttrValue,
    pub description: AttrValue,
}

/// Panel section that has no backend support yet
#[function_component(Placeholder)]
pub fn placeholder(props: &PlaceholderProps) -> Html {
    html! {
        <div class="space-y-4">
            <h1 class="text-3xl font-bold text-yellow-400">{props.title.clone()}</h1>
            <p class="text-gray-400">{props.description.clone()}</p>
            <div class="bg-gray-800 rounded-xl p-8 border border-gray-700 text-center text-gray-400">
                {"Módulo en desarrollo"}
            </div>
        </div>
    }
}

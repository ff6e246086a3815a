pub mod components;
pub mod config;
pub mod hooks;
pub mod interaction;
pub mod pages;

use yew::prelude::*;

use crate::pages::home::Home;

#[function_component(App)]
pub fn app() -> Html {
    html! { <Home /> }
}

/// Mounts the app onto the document body. Called from the wasm entry point.
pub fn run() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}

use yew::prelude::*;
use log::info;

mod config;
mod content;
mod host;
mod hooks;
mod scroll;
mod components {
    pub mod icon;
    pub mod navbar;
    pub mod section_heading;
}
mod pages {
    pub mod landing;
}

use pages::landing::Landing;

#[function_component]
fn App() -> Html {
    html! {
        <Landing />
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting VITIs");
    yew::Renderer::<App>::new().render();
}

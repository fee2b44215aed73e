use yew::prelude::*;
use log::info;

mod config;
mod content;
mod scroll;
mod styles;
mod theme;
mod view_state;

mod components {
    pub mod certifications;
    pub mod contact_fab;
    pub mod experience;
    pub mod footer;
    pub mod hero;
    pub mod icon;
    pub mod nav;
    pub mod projects;
    pub mod scroll_progress;
    pub mod skills;
}
mod pages {
    pub mod portfolio;
}

use pages::portfolio::Portfolio;

#[function_component]
fn App() -> Html {
    html! {
        <>
            <style>{styles::GLOBAL_CSS}</style>
            <Portfolio />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting portfolio");
    yew::Renderer::<App>::new().render();
}

use log::info;
use yew::prelude::*;

mod config;
mod scroll {
    pub mod dispatch;
    pub mod effects;
    pub mod geometry;
    pub mod parallax;
    pub mod reveal;
    pub mod sections;
}
mod components {
    pub mod cards;
    pub mod cursor_glow;
    pub mod nav;
    pub mod notification;
    pub mod signup_form;
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

    // Initialize logging; a second init only happens under hot reload.
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}

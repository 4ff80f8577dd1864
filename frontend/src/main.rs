use log::info;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod controls;
mod error;
mod hooks;
mod effects {
    pub mod clock;
    pub mod decrypt;
    pub mod press;
    pub mod scroll;
    pub mod typing;
}
mod components {
    pub mod backdrop;
    pub mod cards;
    pub mod decrypting_text;
    pub mod navbar;
    pub mod reveal_section;
    pub mod typed_text;
    pub mod work_panel;
}
mod pages {
    pub mod home;
    pub mod not_found;
}

use config::PageVariant;
use pages::{home::Home, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/work")]
    Work,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home variant={PageVariant::Studio} /> }
        },
        Route::Work => {
            info!("Rendering Work page");
            html! { <Home variant={PageVariant::Showcase} /> }
        },
        Route::NotFound => {
            info!("Rendering 404 page");
            html! { <NotFound /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    if let Err(e) = console_log::init_with_level(config::log_level()) {
        // No logger yet, so fall back to the raw console
        web_sys::console::error_1(&format!("error initializing log: {}", e).into());
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

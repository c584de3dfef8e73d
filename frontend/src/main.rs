use yew::prelude::*;
use yew_router::prelude::*;

mod audio;
mod config;
mod content;
mod error;
mod simulator;
mod components {
    pub mod earnings_card;
    pub mod testimonial_panel;
}
mod pages {
    pub mod landing;
    pub mod not_found;
}
mod utils {
    pub mod format;
}

use pages::{landing::Landing, not_found::NotFound};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[function_component(App)]
fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    log::info!("Starting landing page");
    yew::Renderer::<App>::new().render();
}

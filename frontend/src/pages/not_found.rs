use yew::prelude::*;
use yew_router::components::Link;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found">
            <h1>{"Nothing here"}</h1>
            <Link<Route> to={Route::Home}>{"Back to the start"}</Link<Route>>
        </div>
    }
}

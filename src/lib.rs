use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod config;
pub mod content;
pub mod pages;
pub mod scroll;

use pages::landing::Landing;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Landing /> },
        Route::NotFound => html! {
            <main class="not-found">
                <h1>{"404"}</h1>
                <Link<Route> to={Route::Home}>{"Back to IBX"}</Link<Route>>
            </main>
        },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::pages::{HomePage, LoginPage, NotFoundPage};
use yew::prelude::*;
use yew_router::prelude::*;

/// The application routes.
#[derive(Debug, Clone, PartialEq, Routable)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Maps a route to its page.
pub fn switch(route: MainRoute) -> Html {
    match route {
        MainRoute::Home => html! { <HomePage /> },
        MainRoute::Login => html! { <LoginPage /> },
        MainRoute::NotFound => html! { <NotFoundPage /> },
    }
}

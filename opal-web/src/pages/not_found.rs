use crate::routes::MainRoute;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div>
                    <h1 class="text-5xl font-bold">{"404"}</h1>
                    <p class="py-4">{"This page does not exist."}</p>
                    <Link<MainRoute> classes="btn btn-primary" to={MainRoute::Home}>
                        {"Back to home"}
                    </Link<MainRoute>>
                </div>
            </div>
        </div>
    }
}

use crate::api::{AuthClient, FetchBody, RequestOptions};
use crate::models::session::SessionStore;
use crate::query::replace_special_characters;
use crate::routes::MainRoute;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let (session, _) = use_store::<SessionStore>();
    let client = use_context::<AuthClient>();
    let navigator = use_navigator();
    let search = use_state(String::new);
    let results = use_state(|| None::<String>);

    let on_search_change = {
        let search = search.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let on_search = {
        let client = client.clone();
        let search = search.clone();
        let results = results.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(client) = client.clone() else {
                return;
            };
            let query = replace_special_characters(&search);
            let results = results.clone();
            spawn_local(async move {
                let url = client.endpoint(&format!("items?q={query}"));
                match client.fetch_with_auth(&url, RequestOptions::default()).await {
                    Some(FetchBody::Json(value)) => results.set(Some(value.to_string())),
                    Some(FetchBody::Raw(response)) => results.set(Some(response.body)),
                    None => {}
                }
            });
        })
    };

    let on_sign_out = {
        let client = client;
        let navigator = navigator;
        Callback::from(move |_: MouseEvent| {
            if let Some(client) = client.as_ref() {
                client.logout();
            }
            if let Some(nav) = navigator.as_ref() {
                nav.push(&MainRoute::Login);
            }
        })
    };

    if !session.tokens.is_authenticated() {
        return html! {
            <div class="hero min-h-screen bg-base-200">
                <div class="hero-content text-center">
                    <div>
                        <h1 class="text-3xl font-bold">{"Opal"}</h1>
                        <p class="py-4">{"You are signed out."}</p>
                        <Link<MainRoute> classes="btn btn-primary" to={MainRoute::Login}>
                            {"Go to sign in"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        };
    }

    html! {
        <div class="p-8 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">{"Opal"}</h1>
                <button class="btn btn-ghost" onclick={on_sign_out}>{"Sign out"}</button>
            </div>
            <form class="join" onsubmit={on_search}>
                <input
                    class="input input-bordered join-item"
                    type="text"
                    placeholder="Search items"
                    value={(*search).clone()}
                    oninput={on_search_change}
                />
                <button class="btn join-item" type="submit">{"Search"}</button>
            </form>
            if let Some(body) = &*results {
                <pre class="bg-base-300 p-4 rounded">{body.clone()}</pre>
            }
        </div>
    }
}

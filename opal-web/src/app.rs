use crate::api::{AuthClient, NavigationRequest};
use crate::config::FrontendConfig;
use crate::models::session::{LoadingState, SessionStore};
use crate::routes::{MainRoute, switch};
use crate::storage::BrowserSession;
use crate::transport::ReqwestTransport;
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Shell />
        </BrowserRouter>
    }
}

/// Builds the auth client from its browser collaborators and provides it to
/// every page through context.
#[function_component(Shell)]
fn shell() -> Html {
    let (loading, loading_dispatch) = use_store::<LoadingState>();
    let (_, session_dispatch) = use_store::<SessionStore>();
    let navigator = use_navigator();

    let client = use_memo((), move |_| {
        let alerts = Callback::from(|message: String| {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message(&message);
            }
        });
        let navigation = Callback::from(move |request: NavigationRequest| match request {
            NavigationRequest::Root => {
                if let Some(nav) = navigator.as_ref() {
                    nav.push(&MainRoute::Home);
                }
            }
            NavigationRequest::Back => {
                if let Some(window) = web_sys::window() {
                    if let Ok(history) = window.history() {
                        let _ = history.back();
                    }
                }
            }
        });
        let config = FrontendConfig::new();
        AuthClient::new(
            config.api_base_url(),
            Rc::new(ReqwestTransport::new()),
            Rc::new(BrowserSession),
            session_dispatch,
            loading_dispatch,
            alerts,
            navigation,
        )
    });

    // Restore a persisted session before anything fires a request.
    {
        let client = client.clone();
        use_effect_with((), move |_| {
            client.hydrate();
        });
    }

    html! {
        <ContextProvider<AuthClient> context={(*client).clone()}>
            if loading.active {
                <div class="fixed inset-0 flex items-center justify-center bg-base-200/50 z-50">
                    <span class="loading loading-spinner loading-lg" />
                </div>
            }
            <Switch<MainRoute> render={switch} />
        </ContextProvider<AuthClient>>
    }
}

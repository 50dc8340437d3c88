mod api;
mod app;
mod config;
mod models;
mod pages;
mod query;
mod routes;
mod storage;
mod transport;

use app::App;
use yew::Renderer;

fn main() {
    // Surface panic payloads on the browser console; the default wasm abort
    // message carries no detail.
    std::panic::set_hook(Box::new(|info| {
        let message = info
            .payload()
            .downcast_ref::<String>()
            .map(String::as_str)
            .or_else(|| info.payload().downcast_ref::<&str>().copied())
            .unwrap_or("unknown panic");
        web_sys::console::error_1(&format!("Panic: {message}").into());
        if let Some(location) = info.location() {
            web_sys::console::error_1(
                &format!("  at {}:{}:{}", location.file(), location.line(), location.column())
                    .into(),
            );
        }
    }));

    web_sys::console::log_1(&"Opal web client starting".into());

    Renderer::<App>::new().render();
}

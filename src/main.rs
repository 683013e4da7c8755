//! Articles Frontend Entry Point

mod actions;
mod api;
mod app;
mod components;
mod config;
mod context;
mod models;
mod router;
mod session;
mod store;
#[cfg(test)]
mod test_support;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = AppConfig::from_env();

    #[cfg(target_arch = "wasm32")]
    {
        if let Some(level) = config.log_level.to_level() {
            wasm_logger::init(wasm_logger::Config::new(level));
        }
    }

    mount_to_body(move || view! { <App config=config /> });
}

//! Pokédex Frontend Entry Point

mod api;
mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;
use pokedex_core::AppConfig;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Trace) {
        web_sys::console::warn_1(&format!("logger already initialized: {}", e).into());
    }

    let config = AppConfig::from_build_env();
    log::set_max_level(config.log_level.to_level_filter());
    log::info!("Pokédex starting against {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}

//! Pokédex App
//!
//! Root component: hash routing between the card grid and the detail page.

use leptos::prelude::*;
use pokedex_core::{AppConfig, Route};

use crate::components::{CatalogPage, DetailPage};
use crate::context::AppContext;

fn current_route() -> Route {
    let hash = window().location().hash().unwrap_or_default();
    Route::from_hash(&hash)
}

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let (route, set_route) = signal(current_route());
    let ctx = AppContext::new(config, (route, set_route));

    // Provide context to all children
    provide_context(ctx);

    // Back/forward buttons and edited URLs
    let _ = window_event_listener(leptos::ev::hashchange, move |_| {
        let next = current_route();
        log::debug!("hashchange -> {:?}", next);
        ctx.sync_route(next);
    });

    view! {
        {move || match route.get() {
            Route::List => view! { <CatalogPage /> }.into_any(),
            Route::Detail(id) => view! { <DetailPage id=id /> }.into_any(),
        }}
    }
}

//! Application Context
//!
//! Shared config and navigation provided via Leptos Context API.

use leptos::prelude::*;
use pokedex_core::{AppConfig, Route};

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    config: StoredValue<AppConfig>,
    /// Current hash route - read
    pub route: ReadSignal<Route>,
    /// Current hash route - write
    set_route: WriteSignal<Route>,
}

impl AppContext {
    pub fn new(config: AppConfig, route: (ReadSignal<Route>, WriteSignal<Route>)) -> Self {
        Self {
            config: StoredValue::new(config),
            route: route.0,
            set_route: route.1,
        }
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    /// Switch views and record the route in the location hash
    pub fn navigate(&self, route: Route) {
        log::info!("navigate to {}", route.to_hash());
        let window = window();
        if let Err(e) = window.location().set_hash(&route.to_hash()) {
            log::warn!("could not update location hash: {:?}", e);
        }
        window.scroll_to_with_x_and_y(0.0, 0.0);
        self.sync_route(route);
    }

    /// Apply a route coming from the browser (initial load, hashchange)
    pub fn sync_route(&self, route: Route) {
        if self.route.get_untracked() != route {
            self.set_route.set(route);
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

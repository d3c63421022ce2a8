//! Catalog State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The store is
//! owned by the list page, so it is discarded when navigating away.

use leptos::prelude::*;
use pokedex_core::{Filters, Pager, PokemonSummary};
use reactive_stores::Store;

/// List page state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct CatalogState {
    /// Current page cursor
    pub pager: Pager,
    /// Search box text
    pub search: String,
    /// Selected type, empty for all types
    pub selected_type: String,
    /// Summary records of the current page
    pub pokemon: Vec<PokemonSummary>,
    /// A page load is in flight
    pub loading: bool,
}

impl CatalogState {
    pub fn new(page_size: u32) -> Self {
        Self {
            pager: Pager::new(page_size),
            search: String::new(),
            selected_type: String::new(),
            pokemon: Vec::new(),
            loading: true,
        }
    }
}

/// Type alias for the store
pub type CatalogStore = Store<CatalogState>;

// ========================
// Store Helper Functions
// ========================

/// Current filters as a plain value (tracked)
pub fn store_filters(store: &CatalogStore) -> Filters {
    Filters {
        search: store.search().get(),
        selected_type: store.selected_type().get(),
    }
}

/// Store a loaded page unless the cursor moved on while it was loading
pub fn store_apply_page(store: &CatalogStore, pager: Pager, pokemon: Vec<PokemonSummary>) {
    match store.pager().try_get_untracked() {
        Some(current) if current == pager => {
            store.pokemon().set(pokemon);
            store.loading().set(false);
        }
        Some(_) => log::debug!("dropping stale results for page {}", pager.page),
        None => {}
    }
}

/// Clear the loading flag after a failed load of the current page
pub fn store_fail_page(store: &CatalogStore, pager: Pager) {
    if store.pager().try_get_untracked() == Some(pager) {
        store.loading().set(false);
    }
}

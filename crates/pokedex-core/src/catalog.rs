//! Catalog Filtering
//!
//! Client-side search and type filters applied to the current page.

use crate::models::PokemonSummary;

/// Case-insensitive substring match on the name. An empty term matches all.
pub fn matches_search(pokemon: &PokemonSummary, term: &str) -> bool {
    pokemon.name.to_lowercase().contains(&term.to_lowercase())
}

/// Exact membership in the type list. An empty selection matches all.
pub fn matches_type(pokemon: &PokemonSummary, selected: &str) -> bool {
    selected.is_empty() || pokemon.types.iter().any(|t| t == selected)
}

/// Apply both filters, keeping page order
pub fn filter_pokemon(list: &[PokemonSummary], term: &str, selected: &str) -> Vec<PokemonSummary> {
    list.iter()
        .filter(|p| matches_search(p, term) && matches_type(p, selected))
        .cloned()
        .collect()
}

/// Current search text and type selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Filters {
    pub search: String,
    pub selected_type: String,
}

impl Filters {
    /// Pagination is hidden while any filter is set
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.selected_type.is_empty()
    }

    pub fn apply(&self, list: &[PokemonSummary]) -> Vec<PokemonSummary> {
        filter_pokemon(list, &self.search, &self.selected_type)
    }
}

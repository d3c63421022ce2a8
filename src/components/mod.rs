//! UI Components
//!
//! Pages and reusable Leptos components.

mod catalog_page;
mod detail_page;
mod loading_spinner;
mod pagination;
mod pokemon_card;
mod search_bar;
mod type_filter;

pub use catalog_page::CatalogPage;
pub use detail_page::DetailPage;
pub use loading_spinner::LoadingSpinner;
pub use pagination::Pagination;
pub use pokemon_card::{PokemonCard, TypeBadges};
pub use search_bar::SearchBar;
pub use type_filter::TypeFilter;

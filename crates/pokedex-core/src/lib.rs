//! Pokédex Core
//!
//! Target-independent logic shared by the frontend: PokéAPI wire models,
//! display records, filtering, pagination and detail formatting.

pub mod catalog;
pub mod config;
pub mod detail;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod pagination;
pub mod palette;
pub mod route;

pub use catalog::{filter_pokemon, matches_search, matches_type, Filters};
pub use config::AppConfig;
pub use error::ApiError;
pub use models::{
    NamedResource, PokemonDetail, PokemonPage, PokemonSpecies, PokemonSummary, TypeList,
};
pub use pagination::Pager;
pub use route::Route;

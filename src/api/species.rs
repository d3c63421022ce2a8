//! Species Endpoint

use pokedex_core::{endpoints, ApiError, AppConfig, PokemonSpecies};

use super::get_json;

pub async fn fetch_species(config: &AppConfig, id: &str) -> Result<PokemonSpecies, ApiError> {
    get_json(&endpoints::pokemon_species(&config.api_base_url, id)).await
}

//! Pokémon Endpoints

use futures::future::try_join_all;
use pokedex_core::{endpoints, ApiError, AppConfig, Pager, PokemonDetail, PokemonPage, PokemonSummary};

use super::get_json;

pub async fn list_pokemon(config: &AppConfig, offset: u32, limit: u32) -> Result<PokemonPage, ApiError> {
    get_json(&endpoints::pokemon_list(&config.api_base_url, limit, offset)).await
}

/// Fetch a detail record by the URL given in a list entry
pub async fn fetch_pokemon(url: &str) -> Result<PokemonDetail, ApiError> {
    get_json(url).await
}

pub async fn fetch_pokemon_by_id(config: &AppConfig, id: &str) -> Result<PokemonDetail, ApiError> {
    get_json(&endpoints::pokemon(&config.api_base_url, id)).await
}

/// Load one page of summary records.
///
/// Fetches the list page, then every detail record on it concurrently.
/// A single failed detail fails the whole page.
pub async fn load_page(config: &AppConfig, pager: Pager) -> Result<Vec<PokemonSummary>, ApiError> {
    let page = list_pokemon(config, pager.offset(), pager.page_size).await?;
    let details = try_join_all(page.results.iter().map(|entry| fetch_pokemon(&entry.url))).await?;

    Ok(PokemonSummary::merge_page(&page.results, &details))
}

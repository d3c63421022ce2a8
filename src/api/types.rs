//! Type Endpoint

use pokedex_core::{endpoints, ApiError, AppConfig, NamedResource, TypeList};

use super::get_json;

/// All type names, in API order
pub async fn list_types(config: &AppConfig) -> Result<Vec<NamedResource>, ApiError> {
    let list: TypeList = get_json(&endpoints::types(&config.api_base_url)).await?;
    Ok(list.results)
}

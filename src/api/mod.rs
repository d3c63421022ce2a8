//! PokéAPI Bindings
//!
//! Browser `fetch` wrappers for the catalog endpoints, organized by resource.
//! Failures are returned to the caller; nothing is retried or cached.

mod pokemon;
mod species;
mod types;

use gloo_net::http::Request;
use pokedex_core::ApiError;
use serde::de::DeserializeOwned;

// Re-export all public items
pub use pokemon::*;
pub use species::*;
pub use types::*;

/// GET a URL and decode its JSON body
async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ApiError> {
    log::debug!("GET {}", url);
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

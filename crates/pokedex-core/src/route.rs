//! Hash Routes
//!
//! `#/` is the card grid, `#/pokemon/{id}` the detail page.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    List,
    /// Raw path segment; the API accepts both ids and names
    Detail(String),
}

impl Route {
    /// Parse `window.location.hash`. Anything unrecognised is the list.
    pub fn from_hash(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_start_matches('/');
        let mut segments = path.split('/').filter(|s| !s.is_empty());

        match (segments.next(), segments.next(), segments.next()) {
            (Some("pokemon"), Some(id), None) => Route::Detail(id.to_string()),
            _ => Route::List,
        }
    }

    pub fn to_hash(&self) -> String {
        match self {
            Route::List => "#/".to_string(),
            Route::Detail(id) => format!("#/pokemon/{}", id),
        }
    }
}

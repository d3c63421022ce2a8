//! API Errors

use thiserror::Error;

/// Failure of a single PokéAPI request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the server answered 404 for the requested record.
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::Status { status: 404, .. })
    }
}

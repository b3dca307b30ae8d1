//! Catalog abstraction over the remote bookstore API.
//!
//! The session controller depends on this trait rather than a concrete HTTP
//! client, so tests can drive it with a scripted catalog.

use crate::models::book::Book;
use thiserror::Error;

/// Errors for catalog requests.
///
/// The taxonomy is deliberately small: a request either failed in transit or
/// came back with a non-success status. Callers log and keep going; there is
/// no retry and no recovery payload.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Connectivity, timeout, or body/decode failure.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-2xx HTTP status.
    #[error("catalog returned HTTP {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Read-only bookstore catalog: keyword search plus a fixed best-seller listing.
#[async_trait::async_trait]
pub trait BookCatalog: Send + Sync {
    /// Issues exactly one search request for the given keyword.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Transport`] on network failure and
    /// [`CatalogError::Status`] on a non-success response.
    async fn search(&self, keyword: &str) -> Result<Vec<Book>, CatalogError>;

    /// Fetches the fixed-category best-seller listing.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`BookCatalog::search`].
    async fn best_sellers(&self) -> Result<Vec<Book>, CatalogError>;
}

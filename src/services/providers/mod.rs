use crate::{
    error::AppResult,
    models::{Catalog, UserProfile},
};

pub mod json_server;

pub use json_server::JsonServerProvider;

/// Source of catalog and corpus data.
///
/// The engine only ever computes against fully materialized values, so a
/// provider must return complete collections, never partial pages or
/// streams. Retries and timeouts live behind this seam, not above it.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait DataProvider: Send + Sync {
    /// Fetch the full id -> title catalog.
    async fn fetch_catalog(&self) -> AppResult<Catalog>;

    /// Fetch every user profile.
    async fn fetch_profiles(&self) -> AppResult<Vec<UserProfile>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

use chrono::{DateTime, Utc};

use super::{Catalog, UserProfile};

/// A fully materialized catalog + corpus pair.
///
/// The engine only ever computes against one of these, never against data
/// still being fetched, so every request sees an internally consistent view.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub catalog: Catalog,
    pub profiles: Vec<UserProfile>,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    pub fn new(catalog: Catalog, profiles: Vec<UserProfile>) -> Self {
        Self {
            catalog,
            profiles,
            fetched_at: Utc::now(),
        }
    }
}

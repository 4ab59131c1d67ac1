use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::Snapshot;
use crate::services::providers::DataProvider;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Latest data snapshot; request handlers only ever take read locks.
    pub snapshot: Arc<RwLock<Snapshot>>,
    /// Source the snapshot can be refreshed from.
    pub provider: Arc<dyn DataProvider>,
}

impl AppState {
    /// Creates application state around an already-loaded snapshot
    pub fn new(snapshot: Snapshot, provider: Arc<dyn DataProvider>) -> Self {
        Self {
            snapshot: Arc::new(RwLock::new(snapshot)),
            provider,
        }
    }
}

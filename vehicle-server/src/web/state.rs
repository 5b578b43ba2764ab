//! Application state for the web layer.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::domain::VehicleRecord;
use crate::ingest;
use crate::registry::{RouteRegistry, TripRegistry};
use crate::store::{MemoryStore, Store};

/// Shared application state.
///
/// The store sits behind a `tokio::sync::RwLock`: the reload task takes
/// the write lock to swap snapshots wholesale, so request handlers never
/// observe a partially replaced snapshot.
#[derive(Clone)]
pub struct AppState {
    /// Current vehicle snapshot.
    pub store: Arc<RwLock<MemoryStore>>,

    /// Trip lookup used by ingest.
    pub trips: Arc<TripRegistry>,

    /// Route metadata used by query compilation.
    pub route_types: Arc<RouteRegistry>,
}

impl AppState {
    /// Create a new app state with an empty store.
    pub fn new(trips: TripRegistry, route_types: RouteRegistry) -> Self {
        Self {
            store: Arc::new(RwLock::new(MemoryStore::new())),
            trips: Arc::new(trips),
            route_types: Arc::new(route_types),
        }
    }

    /// Run a raw feed batch through the ingest pipeline and install it
    /// as the new snapshot. Returns the number of records stored.
    pub async fn apply_snapshot(&self, batch: Vec<VehicleRecord>) -> usize {
        let records = ingest::load_snapshot(batch, self.trips.as_ref());
        let mut store = self.store.write().await;
        store.replace_all(records);
        store.len()
    }
}

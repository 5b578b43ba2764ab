//! In-memory store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use crate::domain::{RouteId, VehicleId, VehicleRecord};

use super::matcher::Matcher;
use super::{IndexSelection, Store};

/// In-memory multiply-indexed snapshot of vehicle positions.
///
/// Holds every record of the current snapshot grouped by vehicle id,
/// plus an `effective_route_id` index over the same `Arc`s. Ingest
/// fan-out can produce several records for one vehicle (one per
/// matching trip); the store retains all of them. Both indexes are
/// rebuilt wholesale on [`Store::replace_all`]; there is no partial
/// mutation.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Records per vehicle id, in insertion order.
    by_id: HashMap<VehicleId, Vec<Arc<VehicleRecord>>>,

    /// Records per effective route. Records with no effective route
    /// are reachable only through scans.
    by_effective_route: HashMap<RouteId, Vec<Arc<VehicleRecord>>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    fn scan(&self, matcher: &Matcher) -> Vec<Arc<VehicleRecord>> {
        self.by_id
            .values()
            .flatten()
            .filter(|record| matcher.matches(record))
            .cloned()
            .collect()
    }

    fn select_route_bucket(&self, route: &RouteId, matcher: &Matcher) -> Vec<Arc<VehicleRecord>> {
        let Some(records) = self.by_effective_route.get(route) else {
            return Vec::new();
        };

        records
            .iter()
            .filter(|record| matcher.matches(record))
            .cloned()
            .collect()
    }
}

impl Store for MemoryStore {
    fn replace_all(&mut self, records: Vec<VehicleRecord>) {
        let mut by_id: HashMap<VehicleId, Vec<Arc<VehicleRecord>>> = HashMap::new();
        let mut by_effective_route: HashMap<RouteId, Vec<Arc<VehicleRecord>>> = HashMap::new();

        for record in records {
            let record = Arc::new(record);
            if let Some(route) = &record.effective_route_id {
                by_effective_route
                    .entry(route.clone())
                    .or_default()
                    .push(Arc::clone(&record));
            }
            by_id.entry(record.id.clone()).or_default().push(record);
        }

        self.by_id = by_id;
        self.by_effective_route = by_effective_route;
    }

    fn select(&self, index: IndexSelection, matcher: &Matcher) -> Vec<Arc<VehicleRecord>> {
        match (index, matcher.fixed_route()) {
            (IndexSelection::EffectiveRoute, Some(route)) => {
                self.select_route_bucket(route, matcher)
            }
            // A route-index select without a concrete route degenerates
            // to a scan; the matcher still applies in full.
            _ => self.scan(matcher),
        }
    }

    fn by_id(&self, id: &VehicleId) -> Option<Arc<VehicleRecord>> {
        self.by_id
            .get(id)
            .and_then(|records| records.first())
            .cloned()
    }

    fn all(&self) -> Vec<Arc<VehicleRecord>> {
        self.by_id.values().flatten().cloned().collect()
    }

    fn len(&self) -> usize {
        self.by_id.values().map(Vec::len).sum()
    }
}

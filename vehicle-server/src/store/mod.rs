//! Indexed vehicle store.
//!
//! The store holds the current snapshot of vehicle positions and answers
//! pattern selects against a fixed set of indexes declared here. The query
//! layer depends only on the [`Store`] trait; [`MemoryStore`] is the
//! in-memory implementation the server runs with.

mod matcher;
mod memory;

use std::sync::Arc;

use crate::domain::{VehicleId, VehicleRecord};

pub use matcher::{FieldConstraint, Matcher};
pub use memory::MemoryStore;

/// Which index a pattern select runs against.
///
/// The store supports exactly two read paths: the unique id index
/// (via [`Store::by_id`]) and the `effective_route_id` index. Everything
/// else is a full scan.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IndexSelection {
    /// No usable index; scan the whole snapshot.
    FullScan,
    /// The `effective_route_id` index.
    EffectiveRoute,
}

/// Interface to the indexed record store.
///
/// Implementations must not lose records on [`Store::replace_all`]: a
/// vehicle fanned out across several trips arrives as several records
/// sharing one vehicle id, and every one of them must stay selectable.
/// Reads during a replace are the caller's concern: the server
/// serializes reloads behind a write lock.
pub trait Store: Send + Sync {
    /// Replace the entire snapshot with the given records.
    fn replace_all(&mut self, records: Vec<VehicleRecord>);

    /// Select all records matching the given pattern.
    ///
    /// With [`IndexSelection::EffectiveRoute`] and a matcher that pins a
    /// concrete route id, only that index bucket is scanned; otherwise
    /// the whole snapshot is. The matcher is always applied in full to
    /// candidates, so the result is identical either way.
    fn select(&self, index: IndexSelection, matcher: &Matcher) -> Vec<Arc<VehicleRecord>>;

    /// Look up a record for a vehicle id.
    ///
    /// When fan-out stored several records for the id, the first stored
    /// one is returned.
    fn by_id(&self, id: &VehicleId) -> Option<Arc<VehicleRecord>>;

    /// All records in the current snapshot.
    fn all(&self) -> Vec<Arc<VehicleRecord>>;

    /// Number of records in the current snapshot.
    fn len(&self) -> usize;

    /// Whether the snapshot is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

//! Ingest hooks for snapshot loads.
//!
//! A snapshot load runs two pure transforms in documented order: the
//! post-load dedup ([`dedup_by_trip`]) over the whole batch, then the
//! per-record pre-insert transform ([`prepare`]) which derives
//! `effective_route_id` and flags anomalous directions. Nothing in this
//! module is fatal; anomalies are logged and the records flow on.

mod dedup;
mod prepare;

use crate::domain::VehicleRecord;
use crate::registry::TripResolver;

pub use dedup::dedup_by_trip;
pub use prepare::prepare;

/// Transform a full feed snapshot into the records to store.
///
/// Composes the ingest hooks: dedup by trip id first, then per-record
/// preparation (which may fan a record out across multiple trips). The
/// output is what [`crate::store::Store::replace_all`] should receive.
pub fn load_snapshot(
    batch: Vec<VehicleRecord>,
    trips: &dyn TripResolver,
) -> Vec<VehicleRecord> {
    dedup_by_trip(batch)
        .into_iter()
        .flat_map(|record| prepare(record, trips))
        .collect()
}

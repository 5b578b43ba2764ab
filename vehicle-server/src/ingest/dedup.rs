//! Post-load deduplication.

use std::collections::HashSet;

use crate::domain::{TripId, VehicleRecord};

/// Retain only the first record per distinct trip id, in input order.
///
/// Source feeds occasionally assign the same trip to several vehicles;
/// keeping the first bounds storage to one record per trip. Records with
/// no trip id are not on any trip and all pass through.
pub fn dedup_by_trip(batch: Vec<VehicleRecord>) -> Vec<VehicleRecord> {
    let mut seen: HashSet<TripId> = HashSet::new();

    batch
        .into_iter()
        .filter(|record| match &record.trip_id {
            Some(trip) => seen.insert(trip.clone()),
            None => true,
        })
        .collect()
}

//! Per-record pre-insert transform.

use tracing::warn;

use crate::domain::VehicleRecord;
use crate::registry::TripResolver;

/// Prepare one incoming record for storage.
///
/// Validates the direction (a non-shuttle route with a direction outside
/// {0, 1} is logged, never rejected) and derives `effective_route_id`
/// from the vehicle's trip:
///
/// - no trip id, or an unresolvable one: one output record with the raw
///   `route_id` as the effective route;
/// - N resolvable trips sharing the id: N output records, one per trip's
///   canonical route. A vehicle whose trip id maps to several trip
///   records is deliberately represented once per matching trip.
pub fn prepare(record: VehicleRecord, trips: &dyn TripResolver) -> Vec<VehicleRecord> {
    if !record.direction_id.is_valid() && !record.is_shuttle() {
        warn!(
            vehicle = %record.id,
            route = record.route_id.as_ref().map(|r| r.as_str()).unwrap_or("-"),
            direction = record.direction_id.raw(),
            "vehicle reported an out-of-range direction"
        );
    }

    let resolved = record
        .trip_id
        .as_ref()
        .map(|trip| trips.route_ids_for_trip(trip))
        .unwrap_or_default();

    if resolved.is_empty() {
        let effective = record.route_id.clone();
        return vec![record.with_effective_route(effective)];
    }

    resolved
        .into_iter()
        .map(|route| record.with_effective_route(Some(route)))
        .collect()
}

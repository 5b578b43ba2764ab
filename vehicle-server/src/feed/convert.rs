//! Conversion from wire types to domain records.

use chrono::Utc;
use tracing::warn;

use crate::domain::{
    DirectionId, Label, RevenueStatus, RouteId, RouteType, TripId, VehicleId, VehicleRecord,
};

use super::types::{FeedSnapshot, FeedVehicle};

/// Convert a feed snapshot into domain records.
///
/// Conversion is best-effort: malformed enum fields are logged and
/// defaulted rather than failing the whole snapshot. The derived
/// `effective_route_id` is left unset here; the ingest pipeline fills
/// it in before storage.
pub fn convert_snapshot(snapshot: FeedSnapshot) -> Vec<VehicleRecord> {
    let fallback_time = snapshot.updated_at.unwrap_or_else(Utc::now);

    snapshot
        .vehicles
        .into_iter()
        .map(|vehicle| convert_vehicle(vehicle, fallback_time))
        .collect()
}

fn convert_vehicle(
    vehicle: FeedVehicle,
    fallback_time: chrono::DateTime<Utc>,
) -> VehicleRecord {
    let revenue = match vehicle.revenue.as_deref() {
        None => RevenueStatus::default(),
        Some(raw) => raw.parse().unwrap_or_else(|_| {
            warn!(vehicle = %vehicle.id, revenue = raw, "unrecognized revenue status, assuming REVENUE");
            RevenueStatus::default()
        }),
    };

    let route_type = vehicle.route_type.and_then(|code| {
        let parsed = RouteType::from_gtfs(code);
        if parsed.is_none() {
            warn!(vehicle = %vehicle.id, code, "unrecognized GTFS route type");
        }
        parsed
    });

    VehicleRecord {
        id: VehicleId::new(vehicle.id),
        trip_id: vehicle.trip_id.map(TripId::new),
        route_id: vehicle.route_id.map(RouteId::new),
        effective_route_id: None,
        direction_id: DirectionId::from_raw(vehicle.direction_id),
        route_type,
        revenue,
        label: vehicle.label.map(Label::new),
        consist: vehicle
            .consist
            .map(|labels| labels.into_iter().map(Label::new).collect()),
        updated_at: vehicle.updated_at.unwrap_or(fallback_time),
    }
}

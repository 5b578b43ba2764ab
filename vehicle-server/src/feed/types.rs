//! Wire types for the vehicle-position snapshot document.
//!
//! These mirror the upstream JSON verbatim; conversion to domain records
//! (with validation and defaulting) happens in [`super::convert`].

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// A full feed snapshot: every live vehicle at one point in time.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedSnapshot {
    /// When the snapshot was generated upstream.
    pub updated_at: Option<DateTime<Utc>>,

    /// All vehicle entities in the snapshot.
    pub vehicles: Vec<FeedVehicle>,
}

/// One vehicle entity as it appears on the wire.
///
/// Everything except the id is optional; feeds are inconsistent about
/// which fields they populate.
#[derive(Debug, Clone, Deserialize)]
pub struct FeedVehicle {
    /// Unique vehicle id.
    pub id: String,

    /// Trip the vehicle reports serving.
    pub trip_id: Option<String>,

    /// Route id as reported.
    pub route_id: Option<String>,

    /// GTFS direction (0 or 1 when well-formed).
    pub direction_id: Option<u8>,

    /// Numeric GTFS route-type code.
    pub route_type: Option<u16>,

    /// Revenue status string ("REVENUE" / "NON_REVENUE").
    pub revenue: Option<String>,

    /// Vehicle display label.
    pub label: Option<String>,

    /// Labels of coupled vehicles, lead first.
    pub consist: Option<Vec<String>>,

    /// Per-entity position timestamp.
    pub updated_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_minimal_vehicle() {
        let snapshot: FeedSnapshot = serde_json::from_str(
            r#"{"updated_at": null, "vehicles": [{"id": "v1"}]}"#,
        )
        .unwrap();

        assert_eq!(snapshot.vehicles.len(), 1);
        assert_eq!(snapshot.vehicles[0].id, "v1");
        assert!(snapshot.vehicles[0].trip_id.is_none());
    }

    #[test]
    fn deserialize_full_vehicle() {
        let json = r#"{
            "updated_at": "2025-03-15T12:00:00Z",
            "vehicles": [{
                "id": "y1234",
                "trip_id": "t1",
                "route_id": "Red",
                "direction_id": 1,
                "route_type": 1,
                "revenue": "NON_REVENUE",
                "label": "1800",
                "consist": ["1800", "1801"],
                "updated_at": "2025-03-15T12:00:05Z"
            }]
        }"#;

        let snapshot: FeedSnapshot = serde_json::from_str(json).unwrap();
        let vehicle = &snapshot.vehicles[0];
        assert_eq!(vehicle.direction_id, Some(1));
        assert_eq!(vehicle.revenue.as_deref(), Some("NON_REVENUE"));
        assert_eq!(vehicle.consist.as_ref().unwrap().len(), 2);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let snapshot: FeedSnapshot = serde_json::from_str(
            r#"{"updated_at": null, "vehicles": [{"id": "v1", "latitude": 42.3}]}"#,
        )
        .unwrap();
        assert_eq!(snapshot.vehicles.len(), 1);
    }
}

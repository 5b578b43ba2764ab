//! Vehicle record and its enum fields.
//!
//! A `VehicleRecord` is the unit held by the store: one live position per
//! vehicle, replaced wholesale on every snapshot load. The record carries
//! both the route id as received and the derived `effective_route_id` that
//! queries are served against.

use chrono::{DateTime, Utc};

use super::{DirectionId, Label, RouteId, TripId, VehicleId};

/// GTFS route types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum RouteType {
    Tram = 0,
    Subway = 1,
    Rail = 2,
    Bus = 3,
    Ferry = 4,
    CableTram = 5,
    AerialLift = 6,
    Funicular = 7,
}

impl RouteType {
    /// Parse a numeric GTFS route-type code.
    pub fn from_gtfs(value: u16) -> Option<Self> {
        match value {
            0 => Some(Self::Tram),
            1 => Some(Self::Subway),
            2 => Some(Self::Rail),
            3 => Some(Self::Bus),
            4 => Some(Self::Ferry),
            5 => Some(Self::CableTram),
            6 => Some(Self::AerialLift),
            7 => Some(Self::Funicular),
            _ => None,
        }
    }

    /// Returns the numeric GTFS code.
    pub fn code(self) -> u16 {
        self as u16
    }
}

/// Error returned when parsing an invalid revenue status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid revenue status: {value}")]
pub struct InvalidRevenueStatus {
    value: String,
}

/// Whether a vehicle's current trip carries fare-paying passengers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RevenueStatus {
    /// In revenue service (the default when the feed says nothing).
    #[default]
    Revenue,
    /// Out of revenue service (deadhead, test run, etc.).
    NonRevenue,
}

impl RevenueStatus {
    /// Returns the wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Revenue => "REVENUE",
            Self::NonRevenue => "NON_REVENUE",
        }
    }
}

impl std::str::FromStr for RevenueStatus {
    type Err = InvalidRevenueStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "REVENUE" => Ok(Self::Revenue),
            "NON_REVENUE" => Ok(Self::NonRevenue),
            other => Err(InvalidRevenueStatus {
                value: other.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for RevenueStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A live vehicle position.
///
/// Immutable per version: records are created whole at ingest and replaced
/// wholesale on the next snapshot. `effective_route_id` is the query key
/// for route filtering; it is derived at ingest from the vehicle's trip,
/// falling back to the raw `route_id` when the trip doesn't resolve.
#[derive(Clone, Debug, PartialEq)]
pub struct VehicleRecord {
    /// Unique vehicle id. A vehicle fanned out across several trips
    /// shares this id over all its records.
    pub id: VehicleId,

    /// The trip the vehicle reports serving, if any.
    pub trip_id: Option<TripId>,

    /// Route id exactly as received from the feed.
    pub route_id: Option<RouteId>,

    /// Derived route id queries are served against. Set by ingest;
    /// never absent while `route_id` is present.
    pub effective_route_id: Option<RouteId>,

    /// Direction of travel (raw value preserved, may be out of range).
    pub direction_id: DirectionId,

    /// GTFS route type, when the feed reports one.
    pub route_type: Option<RouteType>,

    /// Revenue status of the current trip.
    pub revenue: RevenueStatus,

    /// Display label of the vehicle.
    pub label: Option<Label>,

    /// Labels of all vehicles coupled into this consist, if reported.
    pub consist: Option<Vec<Label>>,

    /// When this position was generated.
    pub updated_at: DateTime<Utc>,
}

impl VehicleRecord {
    /// Returns a copy with the given effective route id.
    ///
    /// Used by ingest when fanning a record out across the trips that
    /// share its trip id.
    pub fn with_effective_route(&self, route: Option<RouteId>) -> Self {
        Self {
            effective_route_id: route,
            ..self.clone()
        }
    }

    /// Whether this vehicle is on a replacement shuttle route.
    pub fn is_shuttle(&self) -> bool {
        self.route_id.as_ref().is_some_and(RouteId::is_shuttle)
    }

    /// Whether the vehicle carries the given label, either as its own
    /// label or anywhere in its consist.
    pub fn carries_label(&self, label: &Label) -> bool {
        if self.label.as_ref() == Some(label) {
            return true;
        }
        self.consist
            .as_ref()
            .is_some_and(|consist| consist.contains(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str) -> VehicleRecord {
        VehicleRecord {
            id: VehicleId::new(id),
            trip_id: None,
            route_id: None,
            effective_route_id: None,
            direction_id: DirectionId::OUTBOUND,
            route_type: None,
            revenue: RevenueStatus::Revenue,
            label: None,
            consist: None,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn route_type_from_gtfs() {
        assert_eq!(RouteType::from_gtfs(1), Some(RouteType::Subway));
        assert_eq!(RouteType::from_gtfs(3), Some(RouteType::Bus));
        assert_eq!(RouteType::from_gtfs(99), None);
    }

    #[test]
    fn route_type_code_roundtrip() {
        for code in 0..=7 {
            let rt = RouteType::from_gtfs(code).unwrap();
            assert_eq!(rt.code(), code);
        }
    }

    #[test]
    fn revenue_parse() {
        assert_eq!("REVENUE".parse(), Ok(RevenueStatus::Revenue));
        assert_eq!("NON_REVENUE".parse(), Ok(RevenueStatus::NonRevenue));
        assert!("revenue".parse::<RevenueStatus>().is_err());
        assert!("".parse::<RevenueStatus>().is_err());
    }

    #[test]
    fn revenue_default_is_revenue() {
        assert_eq!(RevenueStatus::default(), RevenueStatus::Revenue);
    }

    #[test]
    fn with_effective_route_replaces_only_that_field() {
        let mut rec = record("v1");
        rec.route_id = Some(RouteId::new("Red"));

        let derived = rec.with_effective_route(Some(RouteId::new("Mattapan")));
        assert_eq!(derived.effective_route_id, Some(RouteId::new("Mattapan")));
        assert_eq!(derived.route_id, Some(RouteId::new("Red")));
        assert_eq!(derived.id, rec.id);
    }

    #[test]
    fn is_shuttle() {
        let mut rec = record("v1");
        assert!(!rec.is_shuttle());

        rec.route_id = Some(RouteId::new("Shuttle-Generic"));
        assert!(rec.is_shuttle());

        rec.route_id = Some(RouteId::new("Green-B"));
        assert!(!rec.is_shuttle());
    }

    #[test]
    fn carries_label_own_label() {
        let mut rec = record("v1");
        rec.label = Some(Label::new("3800"));

        assert!(rec.carries_label(&Label::new("3800")));
        assert!(!rec.carries_label(&Label::new("3801")));
    }

    #[test]
    fn carries_label_via_consist() {
        let mut rec = record("v1");
        rec.label = Some(Label::new("3800"));
        rec.consist = Some(vec![Label::new("3800"), Label::new("3801")]);

        assert!(rec.carries_label(&Label::new("3801")));
        assert!(!rec.carries_label(&Label::new("3999")));
    }

    #[test]
    fn carries_label_absent_consist() {
        let rec = record("v1");
        assert!(!rec.carries_label(&Label::new("3800")));
    }
}

//! Data transfer objects for web requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DirectionId, Label, RevenueStatus, RouteId, RouteType, VehicleRecord};
use crate::query::FilterRequest;

/// Query parameters for `GET /vehicles`.
///
/// Multi-value parameters are comma-separated, e.g.
/// `?route=Red,Orange&direction_id=0&revenue=REVENUE,NON_REVENUE`.
#[derive(Debug, Default, Deserialize)]
pub struct VehicleFilterParams {
    /// Comma-separated route ids.
    pub route: Option<String>,

    /// Direction id (0 or 1; other values match nothing but are legal).
    pub direction_id: Option<u8>,

    /// Comma-separated numeric GTFS route-type codes.
    pub route_type: Option<String>,

    /// Comma-separated revenue statuses.
    pub revenue: Option<String>,

    /// Comma-separated vehicle labels.
    pub label: Option<String>,
}

/// A rejected query parameter.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {param} parameter: {value}")]
pub struct InvalidFilterParam {
    /// Which parameter was malformed.
    pub param: &'static str,
    /// The offending value.
    pub value: String,
}

fn split_csv(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty())
}

impl VehicleFilterParams {
    /// Parse the raw parameters into a domain filter request.
    pub fn into_filter(self) -> Result<FilterRequest, InvalidFilterParam> {
        let routes = self
            .route
            .as_deref()
            .map(|raw| split_csv(raw).map(RouteId::new).collect());

        let labels = self
            .label
            .as_deref()
            .map(|raw| split_csv(raw).map(Label::new).collect());

        let route_types = self
            .route_type
            .as_deref()
            .map(|raw| {
                split_csv(raw)
                    .map(|code| {
                        code.parse::<u16>()
                            .ok()
                            .and_then(RouteType::from_gtfs)
                            .ok_or_else(|| InvalidFilterParam {
                                param: "route_type",
                                value: code.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        let revenue = self
            .revenue
            .as_deref()
            .map(|raw| {
                split_csv(raw)
                    .map(|status| {
                        status
                            .parse::<RevenueStatus>()
                            .map_err(|_| InvalidFilterParam {
                                param: "revenue",
                                value: status.to_string(),
                            })
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .transpose()?;

        Ok(FilterRequest {
            labels,
            routes,
            direction_id: self.direction_id.map(DirectionId::new),
            route_types,
            revenue,
        })
    }
}

/// A vehicle in a response.
#[derive(Debug, Serialize)]
pub struct VehicleView {
    /// Unique vehicle id.
    pub id: String,

    /// Trip the vehicle reports serving.
    pub trip_id: Option<String>,

    /// Route id as received from the feed.
    pub route_id: Option<String>,

    /// Derived route id the query matched against.
    pub effective_route_id: Option<String>,

    /// Raw direction value.
    pub direction_id: u8,

    /// Numeric GTFS route-type code.
    pub route_type: Option<u16>,

    /// Revenue status string.
    pub revenue: &'static str,

    /// Vehicle display label.
    pub label: Option<String>,

    /// Labels of coupled vehicles.
    pub consist: Option<Vec<String>>,

    /// Position timestamp.
    pub updated_at: DateTime<Utc>,
}

impl VehicleView {
    /// Build a view from a domain record.
    pub fn from_record(record: &VehicleRecord) -> Self {
        Self {
            id: record.id.to_string(),
            trip_id: record.trip_id.as_ref().map(ToString::to_string),
            route_id: record.route_id.as_ref().map(ToString::to_string),
            effective_route_id: record
                .effective_route_id
                .as_ref()
                .map(ToString::to_string),
            direction_id: record.direction_id.raw(),
            route_type: record.route_type.map(RouteType::code),
            revenue: record.revenue.as_str(),
            label: record.label.as_ref().map(ToString::to_string),
            consist: record
                .consist
                .as_ref()
                .map(|labels| labels.iter().map(ToString::to_string).collect()),
            updated_at: record.updated_at,
        }
    }
}

/// Response for `GET /vehicles`.
#[derive(Debug, Serialize)]
pub struct VehicleListResponse {
    /// Matching vehicles.
    pub vehicles: Vec<VehicleView>,
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description.
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_params_parse_to_empty_filter() {
        let filter = VehicleFilterParams::default().into_filter().unwrap();
        assert_eq!(filter, FilterRequest::all());
    }

    #[test]
    fn csv_routes_and_labels() {
        let params = VehicleFilterParams {
            route: Some("Red, Orange".into()),
            label: Some("1800,1801".into()),
            ..VehicleFilterParams::default()
        };

        let filter = params.into_filter().unwrap();
        assert_eq!(
            filter.routes,
            Some(vec![RouteId::new("Red"), RouteId::new("Orange")])
        );
        assert_eq!(
            filter.labels,
            Some(vec![Label::new("1800"), Label::new("1801")])
        );
    }

    #[test]
    fn route_types_parse_numeric_codes() {
        let params = VehicleFilterParams {
            route_type: Some("1,3".into()),
            ..VehicleFilterParams::default()
        };

        let filter = params.into_filter().unwrap();
        assert_eq!(
            filter.route_types,
            Some(vec![RouteType::Subway, RouteType::Bus])
        );
    }

    #[test]
    fn bad_route_type_is_rejected() {
        let params = VehicleFilterParams {
            route_type: Some("1,banana".into()),
            ..VehicleFilterParams::default()
        };

        let err = params.into_filter().unwrap_err();
        assert_eq!(err.param, "route_type");
        assert_eq!(err.value, "banana");
    }

    #[test]
    fn out_of_range_route_type_is_rejected() {
        let params = VehicleFilterParams {
            route_type: Some("42".into()),
            ..VehicleFilterParams::default()
        };

        assert!(params.into_filter().is_err());
    }

    #[test]
    fn revenue_statuses_parse() {
        let params = VehicleFilterParams {
            revenue: Some("REVENUE,NON_REVENUE".into()),
            ..VehicleFilterParams::default()
        };

        let filter = params.into_filter().unwrap();
        assert_eq!(
            filter.revenue,
            Some(vec![RevenueStatus::Revenue, RevenueStatus::NonRevenue])
        );
    }

    #[test]
    fn bad_revenue_is_rejected() {
        let params = VehicleFilterParams {
            revenue: Some("SOMETIMES".into()),
            ..VehicleFilterParams::default()
        };

        let err = params.into_filter().unwrap_err();
        assert_eq!(err.param, "revenue");
    }

    #[test]
    fn direction_id_passes_through() {
        let params = VehicleFilterParams {
            direction_id: Some(1),
            ..VehicleFilterParams::default()
        };

        let filter = params.into_filter().unwrap();
        assert_eq!(filter.direction_id, Some(DirectionId::INBOUND));
    }

    #[test]
    fn view_serializes_enum_fields_as_wire_values() {
        let record = VehicleRecord {
            id: crate::domain::VehicleId::new("v1"),
            trip_id: None,
            route_id: Some(RouteId::new("Red")),
            effective_route_id: Some(RouteId::new("Red")),
            direction_id: DirectionId::INBOUND,
            route_type: Some(RouteType::Subway),
            revenue: RevenueStatus::NonRevenue,
            label: None,
            consist: None,
            updated_at: DateTime::UNIX_EPOCH,
        };

        let view = VehicleView::from_record(&record);
        assert_eq!(view.direction_id, 1);
        assert_eq!(view.route_type, Some(1));
        assert_eq!(view.revenue, "NON_REVENUE");

        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["effective_route_id"], "Red");
    }
}

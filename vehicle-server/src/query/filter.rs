//! Filter requests.

use crate::domain::{DirectionId, Label, RevenueStatus, RouteId, RouteType};

/// A structured vehicle filter.
///
/// Every field is optional; an absent field does not constrain. This is
/// a transient query argument, never persisted. Multi-value fields are
/// treated as sets: an explicitly empty list behaves like an absent one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FilterRequest {
    /// Keep vehicles whose label, or any consist entry, is in this set.
    /// Applied as a residual filter after index selection.
    pub labels: Option<Vec<Label>>,

    /// Keep vehicles on these effective routes.
    pub routes: Option<Vec<RouteId>>,

    /// Keep vehicles travelling in this direction. Only constrains in
    /// combination with `routes`; on its own it is inert.
    pub direction_id: Option<DirectionId>,

    /// Keep vehicles on routes of these types, resolved to route ids
    /// through the route-type resolver at compile time.
    pub route_types: Option<Vec<RouteType>>,

    /// Keep vehicles with these revenue statuses. When any other filter
    /// is supplied, absent means revenue-only: `{Revenue}`. A request
    /// with no filters at all matches the full snapshot regardless of
    /// revenue status.
    pub revenue: Option<Vec<RevenueStatus>>,
}

impl FilterRequest {
    /// A request with no filters at all; matches the full snapshot.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether no filter dimension was supplied at all (empty lists
    /// count as absent). Such a request matches the full snapshot.
    pub fn is_unconstrained(&self) -> bool {
        self.routes().is_none()
            && self.route_types().is_none()
            && self.labels().is_none()
            && self.direction_id.is_none()
            && self.revenue.as_deref().map_or(true, <[_]>::is_empty)
    }

    /// The route filter, with empty lists normalized to absent.
    pub fn routes(&self) -> Option<&[RouteId]> {
        self.routes.as_deref().filter(|r| !r.is_empty())
    }

    /// The route-type filter, with empty lists normalized to absent.
    pub fn route_types(&self) -> Option<&[RouteType]> {
        self.route_types.as_deref().filter(|t| !t.is_empty())
    }

    /// The label filter, with empty lists normalized to absent.
    pub fn labels(&self) -> Option<&[Label]> {
        self.labels.as_deref().filter(|l| !l.is_empty())
    }

    /// The revenue statuses to match, defaulting to revenue-only.
    pub fn revenue_statuses(&self) -> Vec<RevenueStatus> {
        match self.revenue.as_deref() {
            Some(statuses) if !statuses.is_empty() => statuses.to_vec(),
            _ => vec![RevenueStatus::Revenue],
        }
    }
}

//! Pattern matchers for index selects.
//!
//! A [`Matcher`] is a partial-key template: each indexed field is either
//! unconstrained (absent), an explicit wildcard, or pinned to a concrete
//! value. The query compiler builds matcher sets by cross product; the
//! store applies them to candidate records.

use crate::domain::{DirectionId, RevenueStatus, RouteId, VehicleRecord};

/// Constraint on a single indexed field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldConstraint<T> {
    /// Explicit "don't care": matches every record, including those
    /// where the field is absent.
    Any,
    /// Matches only records where the field equals the value.
    Eq(T),
}

impl<T: PartialEq> FieldConstraint<T> {
    /// Whether a present field value satisfies this constraint.
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Self::Any => true,
            Self::Eq(expected) => expected == value,
        }
    }

    /// Whether an optional field value satisfies this constraint.
    ///
    /// `Eq` never admits an absent value; `Any` admits everything.
    pub fn admits_opt(&self, value: Option<&T>) -> bool {
        match (self, value) {
            (Self::Any, _) => true,
            (Self::Eq(_), None) => false,
            (Self::Eq(expected), Some(actual)) => expected == actual,
        }
    }
}

/// A partial-key template for one index select.
///
/// An absent field behaves like [`FieldConstraint::Any`] when matching;
/// the distinction matters for construction, where only an absent or
/// agreeing route field may be narrowed (see [`Matcher::constrain_route`]).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Matcher {
    /// Constraint on the derived `effective_route_id` field.
    pub effective_route: Option<FieldConstraint<RouteId>>,

    /// Constraint on the direction of travel.
    pub direction: Option<FieldConstraint<DirectionId>>,

    /// Constraint on revenue status.
    pub revenue: Option<FieldConstraint<RevenueStatus>>,
}

impl Matcher {
    /// The empty matcher: no constraints, matches every record.
    pub fn any() -> Self {
        Self::default()
    }

    /// Returns a copy with the route field pinned to the given id.
    pub fn with_route(&self, route: RouteId) -> Self {
        Self {
            effective_route: Some(FieldConstraint::Eq(route)),
            ..self.clone()
        }
    }

    /// Returns a copy with the given direction constraint.
    pub fn with_direction(&self, direction: FieldConstraint<DirectionId>) -> Self {
        Self {
            direction: Some(direction),
            ..self.clone()
        }
    }

    /// Returns a copy with the revenue field pinned to the given status.
    pub fn with_revenue(&self, revenue: RevenueStatus) -> Self {
        Self {
            revenue: Some(FieldConstraint::Eq(revenue)),
            ..self.clone()
        }
    }

    /// Try to narrow the route field to a concrete id.
    ///
    /// A matcher cannot claim two distinct route ids at once, so this
    /// returns `None` when the field is already pinned to a different id
    /// (the caller drops that combination before querying). A matcher
    /// that is unconstrained, wildcarded, or already pinned to the same
    /// id narrows successfully.
    pub fn constrain_route(&self, route: &RouteId) -> Option<Self> {
        match &self.effective_route {
            Some(FieldConstraint::Eq(existing)) if existing != route => None,
            _ => Some(self.with_route(route.clone())),
        }
    }

    /// The concrete route id this matcher requires, if any.
    ///
    /// Used by the store to pick an index bucket.
    pub fn fixed_route(&self) -> Option<&RouteId> {
        match &self.effective_route {
            Some(FieldConstraint::Eq(route)) => Some(route),
            _ => None,
        }
    }

    /// Whether a record satisfies every constraint in this matcher.
    pub fn matches(&self, record: &VehicleRecord) -> bool {
        if let Some(route) = &self.effective_route {
            if !route.admits_opt(record.effective_route_id.as_ref()) {
                return false;
            }
        }
        if let Some(direction) = &self.direction {
            if !direction.admits(&record.direction_id) {
                return false;
            }
        }
        if let Some(revenue) = &self.revenue {
            if !revenue.admits(&record.revenue) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::VehicleId;
    use chrono::DateTime;

    fn record(route: Option<&str>, direction: u8, revenue: RevenueStatus) -> VehicleRecord {
        VehicleRecord {
            id: VehicleId::new("v1"),
            trip_id: None,
            route_id: route.map(RouteId::new),
            effective_route_id: route.map(RouteId::new),
            direction_id: DirectionId::new(direction),
            route_type: None,
            revenue,
            label: None,
            consist: None,
            updated_at: DateTime::UNIX_EPOCH,
        }
    }

    #[test]
    fn empty_matcher_matches_everything() {
        let matcher = Matcher::any();
        assert!(matcher.matches(&record(Some("Red"), 0, RevenueStatus::Revenue)));
        assert!(matcher.matches(&record(None, 9, RevenueStatus::NonRevenue)));
    }

    #[test]
    fn route_eq_rejects_other_and_absent_routes() {
        let matcher = Matcher::any().with_route(RouteId::new("Red"));

        assert!(matcher.matches(&record(Some("Red"), 0, RevenueStatus::Revenue)));
        assert!(!matcher.matches(&record(Some("Blue"), 0, RevenueStatus::Revenue)));
        assert!(!matcher.matches(&record(None, 0, RevenueStatus::Revenue)));
    }

    #[test]
    fn direction_wildcard_admits_any_direction() {
        let matcher = Matcher::any().with_direction(FieldConstraint::Any);

        assert!(matcher.matches(&record(Some("Red"), 0, RevenueStatus::Revenue)));
        assert!(matcher.matches(&record(Some("Red"), 2, RevenueStatus::Revenue)));
    }

    #[test]
    fn direction_eq_filters() {
        let matcher =
            Matcher::any().with_direction(FieldConstraint::Eq(DirectionId::INBOUND));

        assert!(matcher.matches(&record(Some("Red"), 1, RevenueStatus::Revenue)));
        assert!(!matcher.matches(&record(Some("Red"), 0, RevenueStatus::Revenue)));
    }

    #[test]
    fn revenue_eq_filters() {
        let matcher = Matcher::any().with_revenue(RevenueStatus::NonRevenue);

        assert!(matcher.matches(&record(Some("Red"), 0, RevenueStatus::NonRevenue)));
        assert!(!matcher.matches(&record(Some("Red"), 0, RevenueStatus::Revenue)));
    }

    #[test]
    fn constrain_route_on_unconstrained_pins_it() {
        let narrowed = Matcher::any().constrain_route(&RouteId::new("Red")).unwrap();
        assert_eq!(narrowed.fixed_route(), Some(&RouteId::new("Red")));
    }

    #[test]
    fn constrain_route_agreeing_is_kept() {
        let matcher = Matcher::any().with_route(RouteId::new("Red"));
        let narrowed = matcher.constrain_route(&RouteId::new("Red")).unwrap();
        assert_eq!(narrowed, matcher);
    }

    #[test]
    fn constrain_route_conflicting_is_dropped() {
        let matcher = Matcher::any().with_route(RouteId::new("Red"));
        assert!(matcher.constrain_route(&RouteId::new("Blue")).is_none());
    }

    #[test]
    fn constrain_route_preserves_other_fields() {
        let matcher = Matcher::any()
            .with_direction(FieldConstraint::Eq(DirectionId::OUTBOUND))
            .with_revenue(RevenueStatus::Revenue);

        let narrowed = matcher.constrain_route(&RouteId::new("Red")).unwrap();
        assert_eq!(
            narrowed.direction,
            Some(FieldConstraint::Eq(DirectionId::OUTBOUND))
        );
        assert_eq!(
            narrowed.revenue,
            Some(FieldConstraint::Eq(RevenueStatus::Revenue))
        );
    }

    #[test]
    fn fixed_route_none_for_wildcard() {
        let matcher = Matcher {
            effective_route: Some(FieldConstraint::Any),
            ..Matcher::any()
        };
        assert_eq!(matcher.fixed_route(), None);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn route_id() -> impl Strategy<Value = RouteId> {
        "[A-Za-z0-9-]{1,12}".prop_map(|s| RouteId::new(s))
    }

    proptest! {
        /// Narrowing an empty matcher always succeeds and pins the route.
        #[test]
        fn constrain_empty_always_succeeds(route in route_id()) {
            let narrowed = Matcher::any().constrain_route(&route).unwrap();
            prop_assert_eq!(narrowed.fixed_route(), Some(&route));
        }

        /// Narrowing is idempotent: constraining to the same id twice
        /// yields the same matcher.
        #[test]
        fn constrain_idempotent(route in route_id()) {
            let once = Matcher::any().constrain_route(&route).unwrap();
            let twice = once.constrain_route(&route).unwrap();
            prop_assert_eq!(once, twice);
        }

        /// Narrowing to a different id than the pinned one always drops.
        #[test]
        fn constrain_conflict_always_drops(a in route_id(), b in route_id()) {
            let pinned = Matcher::any().with_route(a.clone());
            let narrowed = pinned.constrain_route(&b);
            if a == b {
                prop_assert!(narrowed.is_some());
            } else {
                prop_assert!(narrowed.is_none());
            }
        }
    }
}

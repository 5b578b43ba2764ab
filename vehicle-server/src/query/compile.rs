//! Query compilation.
//!
//! Translates a [`FilterRequest`] into an index choice plus a set of
//! matchers, built as a cross product across the filter dimensions. The
//! only non-trivial rule is route-id exclusivity: route-type expansion
//! and direct route filtering constrain the same field, so combinations
//! that would pin two distinct route ids are dropped before querying
//! rather than sent to the store as can-never-match lookups.

use crate::registry::RouteTypeResolver;
use crate::store::{FieldConstraint, IndexSelection, Matcher};

use super::filter::FilterRequest;

/// A compiled query: which index to hit and with which patterns.
///
/// An empty matcher set means the request was over-constrained and the
/// result is empty without touching the store.
#[derive(Clone, Debug, PartialEq)]
pub struct CompiledQuery {
    /// Index the matchers run against.
    pub index: IndexSelection,

    /// Matchers to select with; results are unioned.
    pub matchers: Vec<Matcher>,
}

/// Compile a filter request against the given route-type resolver.
pub fn compile(request: &FilterRequest, route_types: &dyn RouteTypeResolver) -> CompiledQuery {
    // A request with no filters at all is the single empty matcher over
    // a full scan: the whole snapshot, non-revenue vehicles included.
    // The revenue default below only kicks in once some filter dimension
    // was supplied.
    if request.is_unconstrained() {
        return CompiledQuery {
            index: IndexSelection::FullScan,
            matchers: vec![Matcher::any()],
        };
    }

    let index = match request.routes() {
        Some(_) => IndexSelection::EffectiveRoute,
        None => IndexSelection::FullScan,
    };

    let mut matchers = vec![Matcher::any()];

    if let Some(routes) = request.routes() {
        let direction = match request.direction_id {
            Some(direction) => FieldConstraint::Eq(direction),
            None => FieldConstraint::Any,
        };
        matchers = routes
            .iter()
            .map(|route| {
                Matcher::any()
                    .with_route(route.clone())
                    .with_direction(direction.clone())
            })
            .collect();
    }

    if let Some(types) = request.route_types() {
        let resolved = route_types.route_ids_by_type(types);
        matchers = matchers
            .iter()
            .flat_map(|matcher| {
                resolved
                    .iter()
                    .filter_map(move |route| matcher.constrain_route(route))
            })
            .collect();
    }

    let statuses = request.revenue_statuses();
    matchers = matchers
        .iter()
        .flat_map(|matcher| {
            statuses
                .iter()
                .map(move |status| matcher.with_revenue(*status))
        })
        .collect();

    CompiledQuery { index, matchers }
}

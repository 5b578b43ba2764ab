//! Vehicle queries.
//!
//! The core of the server: compile a [`FilterRequest`] into index
//! lookups, execute them against the store, and apply residual filters.
//! Everything here is a pure function over its inputs; absence and
//! over-constrained requests are empty results, never errors.

mod compile;
mod filter;
mod residual;


use std::collections::HashSet;
use std::sync::Arc;

use crate::domain::{VehicleId, VehicleRecord};
use crate::registry::RouteTypeResolver;
use crate::store::Store;

pub use compile::{CompiledQuery, compile};
pub use filter::FilterRequest;
pub use residual::apply_residual;

/// Execute a filter request against the store.
///
/// Runs every compiled matcher, unions the results with deduplication by
/// vehicle id (overlapping matchers can return the same record twice,
/// and a vehicle fanned out across trips is stored once per trip), then
/// applies the residual label filter. Each vehicle appears at most once
/// in the response.
pub fn filter_by(
    store: &dyn Store,
    route_types: &dyn RouteTypeResolver,
    request: &FilterRequest,
) -> Vec<Arc<VehicleRecord>> {
    let compiled = compile(request, route_types);

    let mut seen: HashSet<VehicleId> = HashSet::new();
    let mut results = Vec::new();
    for matcher in &compiled.matchers {
        for record in store.select(compiled.index, matcher) {
            if seen.insert(record.id.clone()) {
                results.push(record);
            }
        }
    }

    apply_residual(results, request)
}

/// Look up a record for a vehicle id (the first stored one when the
/// vehicle fanned out across trips).
pub fn by_id(store: &dyn Store, id: &VehicleId) -> Option<Arc<VehicleRecord>> {
    store.by_id(id)
}

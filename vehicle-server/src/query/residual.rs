//! Residual filtering.
//!
//! The label filter matches a vehicle's own label or any entry of its
//! consist, which no single-field index can express, so it runs over the
//! candidates the index selects.

use std::sync::Arc;

use crate::domain::VehicleRecord;

use super::filter::FilterRequest;

/// Apply the filters the index cannot express.
///
/// Currently that is only `labels`: a record is kept iff its label is in
/// the requested set, or its consist is present and intersects it. An
/// absent label filter passes everything through unchanged.
pub fn apply_residual(
    records: Vec<Arc<VehicleRecord>>,
    request: &FilterRequest,
) -> Vec<Arc<VehicleRecord>> {
    let Some(labels) = request.labels() else {
        return records;
    };

    records
        .into_iter()
        .filter(|record| labels.iter().any(|label| record.carries_label(label)))
        .collect()
}

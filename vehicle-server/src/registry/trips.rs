//! Trip lookup.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{RouteId, TripId};

use super::RegistryError;

/// Resolves a trip id to the canonical route ids of the matching trips.
///
/// A trip id can resolve to zero, one, or many trips; ingest fans a
/// vehicle record out across all of them.
pub trait TripResolver: Send + Sync {
    /// Route ids of every trip with the given id.
    fn route_ids_for_trip(&self, trip: &TripId) -> Vec<RouteId>;
}

/// One trip entry in the reference file.
#[derive(Debug, Deserialize)]
struct TripEntry {
    trip_id: String,
    route_id: String,
}

/// In-memory trip lookup loaded from a JSON reference file.
///
/// The file is an array of `{"trip_id": "...", "route_id": "..."}`
/// objects. Multiple entries may share a trip id (added trips reusing a
/// schedule id, for example); all of them are retained.
#[derive(Debug, Default)]
pub struct TripRegistry {
    by_trip: HashMap<TripId, Vec<RouteId>>,
}

impl TripRegistry {
    /// Build a registry from (trip id, route id) pairs.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (TripId, RouteId)>) -> Self {
        let mut by_trip: HashMap<TripId, Vec<RouteId>> = HashMap::new();
        for (trip, route) in pairs {
            by_trip.entry(trip).or_default().push(route);
        }
        Self { by_trip }
    }

    /// Load a registry from a JSON reference file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.display().to_string(),
            source,
        })?;

        let entries: Vec<TripEntry> =
            serde_json::from_str(&json).map_err(|source| RegistryError::Json {
                path: path.display().to_string(),
                source,
            })?;

        Ok(Self::from_pairs(entries.into_iter().map(|e| {
            (TripId::new(e.trip_id), RouteId::new(e.route_id))
        })))
    }

    /// Number of distinct trip ids known.
    pub fn len(&self) -> usize {
        self.by_trip.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.by_trip.is_empty()
    }
}

impl TripResolver for TripRegistry {
    fn route_ids_for_trip(&self, trip: &TripId) -> Vec<RouteId> {
        self.by_trip.get(trip).cloned().unwrap_or_default()
    }
}

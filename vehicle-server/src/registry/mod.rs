//! Reference-data registries.
//!
//! The query and ingest layers consume two lookup services: a trip
//! resolver (trip id to canonical route ids) and a route-type resolver
//! (route types to route ids). Both are traits so tests can substitute
//! fixtures; the in-memory registries here load from JSON reference files.

mod route_types;
mod trips;

pub use route_types::{RouteRegistry, RouteTypeResolver};
pub use trips::{TripRegistry, TripResolver};

/// Error loading a registry from its reference file.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    /// Reading the file failed.
    #[error("failed to read registry file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file contents were not valid JSON of the expected shape.
    #[error("failed to parse registry file {path}: {source}")]
    Json {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    /// An entry carried a route-type code outside the GTFS range.
    #[error("unknown GTFS route type {code} for route {route}")]
    UnknownRouteType { route: String, code: u16 },
}

//! Identifier types for transit entities.
//!
//! All identifiers wrap `Arc<str>` so they can be cloned freely when a
//! vehicle record fans out across indexes and query results.

use std::fmt;
use std::sync::Arc;

/// Route ids beginning with this prefix denote replacement shuttle routes,
/// which are exempt from direction validation.
pub const SHUTTLE_ROUTE_PREFIX: &str = "Shuttle-";

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Arc<str>);

        impl $name {
            /// Create a new identifier from any string-like value.
            pub fn new(s: impl AsRef<str>) -> Self {
                Self(s.as_ref().into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!(stringify!($name), "({})"), self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(s: &str) -> Self {
                Self::new(s)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id! {
    /// Unique id of a vehicle (e.g., fleet number key from the feed).
    VehicleId
}

string_id! {
    /// Id of a scheduled trip a vehicle may be serving.
    TripId
}

string_id! {
    /// Id of a transit route (e.g., "Red", "1", "Shuttle-Generic").
    RouteId
}

string_id! {
    /// Display label of a physical vehicle (e.g., carriage number).
    Label
}

impl RouteId {
    /// Whether this route is a replacement shuttle.
    ///
    /// Shuttle routes carry arbitrary direction values, so they are
    /// skipped by ingest-time direction validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehicle_server::domain::RouteId;
    ///
    /// assert!(RouteId::new("Shuttle-Generic").is_shuttle());
    /// assert!(!RouteId::new("Red").is_shuttle());
    /// ```
    pub fn is_shuttle(&self) -> bool {
        self.as_str().starts_with(SHUTTLE_ROUTE_PREFIX)
    }
}

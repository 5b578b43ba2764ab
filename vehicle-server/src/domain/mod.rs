//! Domain types for the vehicle-position server.
//!
//! This module contains the core domain model for live transit vehicles.
//! Identifier types are cheap to clone; enums are parsed at the boundary,
//! so code that receives these types can trust their validity.

mod direction;
mod ids;
mod vehicle;

pub use direction::DirectionId;
pub use ids::{Label, RouteId, SHUTTLE_ROUTE_PREFIX, TripId, VehicleId};
pub use vehicle::{InvalidRevenueStatus, RevenueStatus, RouteType, VehicleRecord};

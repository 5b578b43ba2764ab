//! Web layer for the vehicle-position server.
//!
//! Provides JSON endpoints for filtering vehicles and looking one up
//! by id.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;

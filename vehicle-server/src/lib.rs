//! Realtime transit vehicle-position server.
//!
//! Holds the current snapshot of vehicle positions in a multiply-indexed
//! in-memory store and answers structured filter queries against it:
//! "which vehicles are on these routes, in this direction, of these
//! route types, carrying this label?"

pub mod domain;
pub mod feed;
pub mod ingest;
pub mod query;
pub mod registry;
pub mod store;
pub mod web;

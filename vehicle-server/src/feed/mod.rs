//! Vehicle-position feed.
//!
//! Fetches snapshot documents (a JSON array of vehicle entities plus a
//! generation timestamp) and converts them to domain records. The HTTP
//! client talks to a live endpoint; the mock client serves a local file
//! so the server can run without upstream access.

mod client;
mod convert;
mod error;
mod mock;
mod types;

pub use client::{FeedClient, FeedConfig};
pub use convert::convert_snapshot;
pub use error::FeedError;
pub use mock::MockFeedClient;
pub use types::{FeedSnapshot, FeedVehicle};

/// A feed source the reload loop can poll.
///
/// Either a live HTTP endpoint or a local mock file, chosen at startup.
pub enum VehicleFeed {
    /// Live HTTP feed.
    Http(FeedClient),
    /// File-backed mock feed.
    Mock(MockFeedClient),
}

impl VehicleFeed {
    /// Fetch the current snapshot from whichever source is configured.
    pub async fn fetch_snapshot(&self) -> Result<FeedSnapshot, FeedError> {
        match self {
            Self::Http(client) => client.fetch_snapshot().await,
            Self::Mock(client) => client.fetch_snapshot(),
        }
    }
}

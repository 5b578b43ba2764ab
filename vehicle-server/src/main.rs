use std::net::SocketAddr;
use std::time::Duration;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use vehicle_server::feed::{self, FeedClient, FeedConfig, MockFeedClient, VehicleFeed};
use vehicle_server::registry::{RouteRegistry, TripRegistry};
use vehicle_server::web::{AppState, create_router};

/// How often to poll the feed for a fresh snapshot.
const DEFAULT_REFRESH_SECS: u64 = 15;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    // Reference data (fail fast if unavailable)
    let trips_path =
        std::env::var("TRIPS_PATH").unwrap_or_else(|_| "data/trips.json".to_string());
    let routes_path =
        std::env::var("ROUTES_PATH").unwrap_or_else(|_| "data/routes.json".to_string());

    let trips = TripRegistry::load(&trips_path).expect("Failed to load trip registry");
    let route_types = RouteRegistry::load(&routes_path).expect("Failed to load route registry");
    info!(
        trips = trips.len(),
        route_types = route_types.len(),
        "loaded reference data"
    );

    // Feed source: a mock file takes precedence over a live URL
    let feed = match std::env::var("MOCK_FEED") {
        Ok(path) => {
            info!(path = %path, "using mock feed");
            VehicleFeed::Mock(MockFeedClient::new(&path).expect("Failed to open mock feed"))
        }
        Err(_) => {
            let url = std::env::var("FEED_URL").unwrap_or_else(|_| {
                eprintln!("Warning: FEED_URL not set. Feed fetches will fail.");
                String::new()
            });
            VehicleFeed::Http(
                FeedClient::new(FeedConfig::new(url)).expect("Failed to create feed client"),
            )
        }
    };

    let state = AppState::new(trips, route_types);

    // Initial snapshot (non-fatal: the store just starts empty)
    match feed.fetch_snapshot().await {
        Ok(snapshot) => {
            let stored = state
                .apply_snapshot(feed::convert_snapshot(snapshot))
                .await;
            info!(vehicles = stored, "loaded initial snapshot");
        }
        Err(e) => warn!(error = %e, "initial snapshot fetch failed, starting empty"),
    }

    // Poll the feed for fresh snapshots
    let refresh_secs = std::env::var("REFRESH_SECS")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or(DEFAULT_REFRESH_SECS);

    let refresh_state = state.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(refresh_secs));
        interval.tick().await; // First tick is immediate, skip it
        loop {
            interval.tick().await;
            match feed.fetch_snapshot().await {
                Ok(snapshot) => {
                    let stored = refresh_state
                        .apply_snapshot(feed::convert_snapshot(snapshot))
                        .await;
                    info!(vehicles = stored, "refreshed snapshot");
                }
                Err(e) => error!(error = %e, "snapshot refresh failed"),
            }
        }
    });

    let app = create_router(state);

    let addr: SocketAddr = std::env::var("BIND_ADDR")
        .ok()
        .and_then(|raw| raw.parse().ok())
        .unwrap_or_else(|| SocketAddr::from(([127, 0, 0, 1], 3000)));

    info!("vehicle-position server listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(listener, app).await.expect("Server error");
}

//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::domain::VehicleId;
use crate::query;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/vehicles", get(list_vehicles))
        .route("/vehicles/:id", get(get_vehicle))
        .with_state(state)
}

/// Application-level request errors.
#[derive(Debug)]
enum AppError {
    BadRequest(String),
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound => (StatusCode::NOT_FOUND, "vehicle not found".to_string()),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl From<InvalidFilterParam> for AppError {
    fn from(err: InvalidFilterParam) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List vehicles matching the filter parameters.
async fn list_vehicles(
    State(state): State<AppState>,
    Query(params): Query<VehicleFilterParams>,
) -> Result<Json<VehicleListResponse>, AppError> {
    let request = params.into_filter()?;

    let store = state.store.read().await;
    let records = query::filter_by(&*store, state.route_types.as_ref(), &request);

    let vehicles = records
        .iter()
        .map(|record| VehicleView::from_record(record))
        .collect();

    Ok(Json(VehicleListResponse { vehicles }))
}

/// Look up a single vehicle by id.
async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleView>, AppError> {
    let store = state.store.read().await;

    let record = query::by_id(&*store, &VehicleId::new(id)).ok_or(AppError::NotFound)?;

    Ok(Json(VehicleView::from_record(&record)))
}

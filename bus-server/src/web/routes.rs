//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::cors::CorsLayer;

use crate::matcher::find_best_match;

use super::dto::*;
use super::state::AppState;

/// Minimum destination length, counted after trimming.
const MIN_DESTINATION_LEN: usize = 2;

/// Create the application router.
///
/// CORS is left permissive: the browser front-end is served from a
/// different origin than this API.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/bus", get(bus_info))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness check endpoint.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Bus agent is running",
    })
}

/// Look up departure times for a destination.
///
/// A query that matches no route is still a 200: the miss message is a
/// normal answer the front-end translates and reads out. Only a
/// missing or too-short destination is a client error.
async fn bus_info(
    State(state): State<AppState>,
    Query(req): Query<BusQueryRequest>,
) -> Result<Response, AppError> {
    let destination = req.destination.trim();

    if destination.chars().count() < MIN_DESTINATION_LEN {
        return Err(AppError::BadRequest {
            message: format!(
                "destination must be at least {MIN_DESTINATION_LEN} characters"
            ),
        });
    }

    match find_best_match(destination, state.catalog.routes()) {
        Some(route) => {
            tracing::debug!(query = destination, route = %route.name, "matched route");
            Ok(Json(BusInfoResponse::from_route(route)).into_response())
        }
        None => {
            tracing::debug!(query = destination, "no route matched");
            Ok(Json(NoMatchResponse::for_query(destination)).into_response())
        }
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::catalog::Route;

/// Query parameters for the bus info endpoint.
#[derive(Debug, Deserialize)]
pub struct BusQueryRequest {
    /// Free-text destination, e.g. "tirupati" or "bus to tirupati".
    pub destination: String,
}

/// A matched route and its timetable.
///
/// This is the only shape the catalog is exposed through; nothing
/// beyond these three fields leaves the service.
#[derive(Debug, Serialize)]
pub struct BusInfoResponse {
    /// Canonical route name.
    pub route: String,

    /// Departure times in timetable order.
    pub departure_times: Vec<String>,

    /// Bus type label, e.g. "Express".
    pub bus_type: String,
}

impl BusInfoResponse {
    /// Build the response from a catalog route.
    pub fn from_route(route: &Route) -> Self {
        Self {
            route: route.name.clone(),
            departure_times: route.departure_times.clone(),
            bus_type: route.bus_type.clone(),
        }
    }
}

/// Friendly payload for a query that matched nothing.
///
/// A miss is a normal outcome, not an error: it is returned with a
/// success status so the front-end can translate and speak it as-is.
#[derive(Debug, Serialize)]
pub struct NoMatchResponse {
    /// Human-readable fallback text, embedding the query.
    pub message: String,
}

impl NoMatchResponse {
    /// Build the fallback message for a query.
    pub fn for_query(query: &str) -> Self {
        Self {
            message: format!("No buses found for '{query}'."),
        }
    }
}

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed status text.
    pub status: &'static str,
}

/// Error body for client-error responses.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// What went wrong.
    pub error: String,
}

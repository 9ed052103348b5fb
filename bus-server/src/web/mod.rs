//! Web layer for the bus query service.
//!
//! Provides the HTTP endpoints the front-end orchestration calls:
//! a destination query endpoint and a liveness check.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;

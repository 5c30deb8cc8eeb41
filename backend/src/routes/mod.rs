//! Route definitions for the Orchard Yield Simulation Service

use axum::{
    routing::{get, post},
    Router,
};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Yield simulation submission
        .route("/simulate-yield", post(handlers::simulate_yield))
        // Optimal planting window report
        .route("/optimal-planting-time", get(handlers::optimal_planting_time))
}

//! HTTP handlers for yield simulation submissions

use axum::{extract::State, Json};
use serde::Serialize;
use shared::SimulationRequest;

use crate::error::AppResult;
use crate::services::simulation::SimulationService;
use crate::AppState;

/// Response for a simulation submission
#[derive(Debug, Serialize)]
pub struct SimulateYieldResponse {
    pub total_apples_yielded: i64,
}

/// Run a yield simulation and record its inputs
pub async fn simulate_yield(
    State(state): State<AppState>,
    Json(request): Json<SimulationRequest>,
) -> AppResult<Json<SimulateYieldResponse>> {
    let service = SimulationService::new(state.db);
    let run = service.simulate_and_record(request).await?;
    Ok(Json(SimulateYieldResponse {
        total_apples_yielded: run.total_apples_yielded,
    }))
}

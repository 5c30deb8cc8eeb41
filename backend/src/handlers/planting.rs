//! HTTP handlers for the optimal planting window report

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::services::planting::{OptimalPlantingReport, PlantingService};
use crate::AppState;

/// Report the recorded seasons whose weather qualifies for planting
pub async fn optimal_planting_time(
    State(state): State<AppState>,
) -> AppResult<Json<OptimalPlantingReport>> {
    let service = PlantingService::new(state.db);
    let report = service.find_optimal_seasons().await?;
    Ok(Json(report))
}

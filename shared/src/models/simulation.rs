//! Simulation submission models

use serde::{Deserialize, Serialize};

use crate::models::weather::DailyWeatherObservation;

/// A client-submitted yield simulation request.
///
/// Carries no yield field: the season total is always computed server-side
/// from this same request, never accepted from the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationRequest {
    pub season_id: String,
    pub tree_count: i32,
    pub apples_per_tree: i32,
    pub season_length_days: i32,
    pub weather_data: Vec<DailyWeatherObservation>,
}

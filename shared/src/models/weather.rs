//! Weather data models

use serde::{Deserialize, Serialize};

/// A single day's weather inside a simulated season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyWeatherObservation {
    /// Day index within the season, starting at 0
    pub day: i32,
    /// Mean temperature in degrees Celsius
    pub temperature: f64,
    /// Rainfall in millimeters
    pub rainfall_mm: f64,
    /// Wind speed in km/h
    pub wind_speed_kmh: f64,
}

/// A daily weather observation persisted under the season it belongs to.
///
/// Written once at simulation time, never mutated. Seasons that appear in
/// more than one simulation run accumulate records under the same season id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherRecord {
    pub season_id: String,
    pub day: i32,
    pub temperature: f64,
    pub rainfall_mm: f64,
    pub wind_speed_kmh: f64,
}

impl WeatherRecord {
    /// Tag a run's observations with its season id, one record per
    /// observation.
    pub fn tag_observations(
        season_id: &str,
        observations: &[DailyWeatherObservation],
    ) -> Vec<WeatherRecord> {
        observations
            .iter()
            .map(|obs| WeatherRecord {
                season_id: season_id.to_string(),
                day: obs.day,
                temperature: obs.temperature,
                rainfall_mm: obs.rainfall_mm,
                wind_speed_kmh: obs.wind_speed_kmh,
            })
            .collect()
    }
}

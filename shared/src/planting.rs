//! Optimal planting window qualification
//!
//! Aggregates persisted weather records by season and reports the seasons
//! whose summarized weather falls inside the optimal planting envelope.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::weather::WeatherRecord;
use crate::yield_model::{
    OPTIMAL_RAINFALL_MAX, OPTIMAL_RAINFALL_MIN, OPTIMAL_TEMPERATURE_MAX, OPTIMAL_TEMPERATURE_MIN,
    WIND_SPEED_LIMIT,
};

/// Per-season weather summary, recomputed on every query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeasonSummary {
    pub season_id: String,
    pub avg_temperature: f64,
    pub avg_rainfall: f64,
    /// Peak wind speed, not the mean: a single violent-wind day disqualifies
    /// a season even when its average is calm.
    pub max_wind_speed: f64,
}

impl SeasonSummary {
    /// Whether this season falls inside the optimal planting envelope,
    /// bounds inclusive.
    pub fn is_optimal(&self) -> bool {
        self.avg_temperature >= OPTIMAL_TEMPERATURE_MIN
            && self.avg_temperature <= OPTIMAL_TEMPERATURE_MAX
            && self.avg_rainfall >= OPTIMAL_RAINFALL_MIN
            && self.avg_rainfall <= OPTIMAL_RAINFALL_MAX
            && self.max_wind_speed <= WIND_SPEED_LIMIT
    }
}

/// The fixed thresholds a season is judged against, echoed in query
/// responses.
#[derive(Debug, Clone, Serialize)]
pub struct PlantingCriteria {
    pub temperature_range: String,
    pub rainfall_range: String,
    pub max_wind_speed_threshold: String,
}

impl Default for PlantingCriteria {
    fn default() -> Self {
        Self {
            temperature_range: format!(
                "{OPTIMAL_TEMPERATURE_MIN}°C to {OPTIMAL_TEMPERATURE_MAX}°C"
            ),
            rainfall_range: format!("{OPTIMAL_RAINFALL_MIN}mm to {OPTIMAL_RAINFALL_MAX}mm"),
            max_wind_speed_threshold: format!("<= {WIND_SPEED_LIMIT} km/h"),
        }
    }
}

#[derive(Default)]
struct SeasonAccumulator {
    temperature_sum: f64,
    rainfall_sum: f64,
    max_wind_speed: f64,
    days: usize,
}

/// Group records by season id and summarize each group.
///
/// Temperature and rainfall are averaged, wind speed is the maximum.
/// Records from every run that reused a season id land in the same group.
pub fn summarize_seasons(records: &[WeatherRecord]) -> Vec<SeasonSummary> {
    let mut groups: BTreeMap<&str, SeasonAccumulator> = BTreeMap::new();

    for record in records {
        let group = groups.entry(record.season_id.as_str()).or_default();
        group.temperature_sum += record.temperature;
        group.rainfall_sum += record.rainfall_mm;
        group.max_wind_speed = group.max_wind_speed.max(record.wind_speed_kmh);
        group.days += 1;
    }

    groups
        .into_iter()
        .map(|(season_id, group)| SeasonSummary {
            season_id: season_id.to_string(),
            avg_temperature: group.temperature_sum / group.days as f64,
            avg_rainfall: group.rainfall_sum / group.days as f64,
            max_wind_speed: group.max_wind_speed,
        })
        .collect()
}

/// Find the seasons whose weather summary qualifies for planting.
///
/// Returns the qualifying summaries sorted by average temperature
/// ascending. Equal temperatures keep season-id order: the grouping map is
/// keyed by season id and the sort is stable.
pub fn find_optimal_seasons(records: &[WeatherRecord]) -> Vec<SeasonSummary> {
    let mut optimal: Vec<SeasonSummary> = summarize_seasons(records)
        .into_iter()
        .filter(SeasonSummary::is_optimal)
        .collect();

    optimal.sort_by(|a, b| a.avg_temperature.total_cmp(&b.avg_temperature));
    optimal
}

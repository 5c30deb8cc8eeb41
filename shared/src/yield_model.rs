//! Orchard yield simulation model
//!
//! Computes a season's total fruit yield from per-day weather observations.
//! Each day contributes `tree_count * apples_per_tree` scaled by a weather
//! adjustment factor in [0, 1].

use crate::models::weather::DailyWeatherObservation;

/// Optimal temperature band for fruit development, degrees Celsius
pub const OPTIMAL_TEMPERATURE_MIN: f64 = 20.0;
pub const OPTIMAL_TEMPERATURE_MAX: f64 = 30.0;

/// Optimal daily rainfall band, millimeters
pub const OPTIMAL_RAINFALL_MIN: f64 = 5.0;
pub const OPTIMAL_RAINFALL_MAX: f64 = 20.0;

/// Wind speed above which fruit drop sets in, km/h
pub const WIND_SPEED_LIMIT: f64 = 30.0;

/// Yield lost per degree Celsius outside the optimal temperature band
const TEMPERATURE_PENALTY_PER_DEGREE: f64 = 0.02;

/// Yield lost per millimeter outside the optimal rainfall band
const RAINFALL_PENALTY_PER_MM: f64 = 0.05;

/// Flat yield loss on days with damaging wind
const WIND_PENALTY: f64 = 0.1;

/// Compute the weather adjustment factor for one day.
///
/// Starts at 1.0 and applies three independent, cumulative penalties:
/// temperature and rainfall deviations scale with distance from their
/// optimal bands, wind above the limit costs a flat 0.1. The factor is
/// floored at 0.0; a bad day contributes nothing, never a negative amount.
pub fn weather_adjustment(observation: &DailyWeatherObservation) -> f64 {
    let mut adjustment = 1.0;

    if observation.temperature < OPTIMAL_TEMPERATURE_MIN {
        adjustment -=
            (OPTIMAL_TEMPERATURE_MIN - observation.temperature) * TEMPERATURE_PENALTY_PER_DEGREE;
    } else if observation.temperature > OPTIMAL_TEMPERATURE_MAX {
        adjustment -=
            (observation.temperature - OPTIMAL_TEMPERATURE_MAX) * TEMPERATURE_PENALTY_PER_DEGREE;
    }

    if observation.rainfall_mm < OPTIMAL_RAINFALL_MIN {
        adjustment -= (OPTIMAL_RAINFALL_MIN - observation.rainfall_mm) * RAINFALL_PENALTY_PER_MM;
    } else if observation.rainfall_mm > OPTIMAL_RAINFALL_MAX {
        adjustment -= (observation.rainfall_mm - OPTIMAL_RAINFALL_MAX) * RAINFALL_PENALTY_PER_MM;
    }

    if observation.wind_speed_kmh > WIND_SPEED_LIMIT {
        adjustment -= WIND_PENALTY;
    }

    adjustment.max(0.0)
}

/// Compute the total apples yielded over a season.
///
/// Sums the per-day contributions and rounds once at the end, half away
/// from zero. An empty season yields 0. Inputs are assumed already
/// validated; the arithmetic is total and never fails, and non-finite
/// observations propagate through it as given.
pub fn compute_yield(
    tree_count: i32,
    apples_per_tree: i32,
    weather_data: &[DailyWeatherObservation],
) -> i64 {
    let base = f64::from(tree_count) * f64::from(apples_per_tree);

    let total: f64 = weather_data
        .iter()
        .map(|observation| base * weather_adjustment(observation))
        .sum();

    total.round() as i64
}

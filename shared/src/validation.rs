//! Request validation for the simulation API
//!
//! These checks run before the yield model is invoked and before anything
//! is persisted.

use crate::models::simulation::SimulationRequest;

/// Validate a simulation submission.
///
/// Counts must be positive, the season id non-empty, and the weather
/// sequence non-empty.
pub fn validate_simulation_request(request: &SimulationRequest) -> Result<(), &'static str> {
    if request.season_id.trim().is_empty() {
        return Err("season_id must not be empty");
    }
    if request.tree_count <= 0 {
        return Err("tree_count must be a positive integer");
    }
    if request.apples_per_tree <= 0 {
        return Err("apples_per_tree must be a positive integer");
    }
    if request.season_length_days <= 0 {
        return Err("season_length_days must be a positive integer");
    }
    if request.weather_data.is_empty() {
        return Err("weather_data must contain at least one observation");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::weather::DailyWeatherObservation;

    fn mild_day(day: i32) -> DailyWeatherObservation {
        DailyWeatherObservation {
            day,
            temperature: 25.0,
            rainfall_mm: 10.0,
            wind_speed_kmh: 15.0,
        }
    }

    fn valid_request() -> SimulationRequest {
        SimulationRequest {
            season_id: "spring2023".to_string(),
            tree_count: 100,
            apples_per_tree: 10,
            season_length_days: 90,
            weather_data: vec![mild_day(0), mild_day(1)],
        }
    }

    #[test]
    fn test_validate_request_valid() {
        assert!(validate_simulation_request(&valid_request()).is_ok());
    }

    #[test]
    fn test_validate_request_empty_season_id() {
        let mut request = valid_request();
        request.season_id = String::new();
        assert!(validate_simulation_request(&request).is_err());
    }

    #[test]
    fn test_validate_request_blank_season_id() {
        let mut request = valid_request();
        request.season_id = "   ".to_string();
        assert!(validate_simulation_request(&request).is_err());
    }

    #[test]
    fn test_validate_request_non_positive_tree_count() {
        let mut request = valid_request();
        request.tree_count = 0;
        assert!(validate_simulation_request(&request).is_err());

        request.tree_count = -5;
        assert!(validate_simulation_request(&request).is_err());
    }

    #[test]
    fn test_validate_request_non_positive_apples_per_tree() {
        let mut request = valid_request();
        request.apples_per_tree = 0;
        assert!(validate_simulation_request(&request).is_err());
    }

    #[test]
    fn test_validate_request_non_positive_season_length() {
        let mut request = valid_request();
        request.season_length_days = -1;
        assert!(validate_simulation_request(&request).is_err());
    }

    #[test]
    fn test_validate_request_empty_weather_data() {
        let mut request = valid_request();
        request.weather_data.clear();
        assert!(validate_simulation_request(&request).is_err());
    }
}

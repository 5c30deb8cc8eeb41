//! Optimal planting window tests
//!
//! Covers season grouping, the threshold envelope with its inclusive
//! bounds, result ordering, and the criteria echo.

use proptest::prelude::*;
use shared::{
    find_optimal_seasons, summarize_seasons, PlantingCriteria, WeatherRecord,
};

/// Helper to build a persisted weather record
fn record(
    season_id: &str,
    day: i32,
    temperature: f64,
    rainfall_mm: f64,
    wind_speed_kmh: f64,
) -> WeatherRecord {
    WeatherRecord {
        season_id: season_id.to_string(),
        day,
        temperature,
        rainfall_mm,
        wind_speed_kmh,
    }
}

/// A season whose every day sits inside the optimal envelope at the given
/// temperature
fn mild_season(season_id: &str, temperature: f64) -> Vec<WeatherRecord> {
    (0..5)
        .map(|day| record(season_id, day, temperature, 10.0, 20.0))
        .collect()
}

// =============================================================================
// Qualification and ordering
// =============================================================================

mod qualification {
    use super::*;

    #[test]
    fn qualifying_seasons_sort_by_temperature() {
        let mut records: Vec<WeatherRecord> = (0..5)
            .map(|day| record("spring2023", day, 25.0, 10.0, 20.0))
            .collect();
        records.extend((0..5).map(|day| record("fall2023", day, 22.0, 15.0, 25.0)));

        let seasons = find_optimal_seasons(&records);

        let ids: Vec<&str> = seasons.iter().map(|s| s.season_id.as_str()).collect();
        assert_eq!(ids, ["fall2023", "spring2023"]);
        assert_eq!(seasons[0].avg_rainfall, 15.0);
        assert_eq!(seasons[0].max_wind_speed, 25.0);
    }

    #[test]
    fn temperature_bounds_are_inclusive() {
        let mut records = mild_season("summer2023", 20.0);
        records.extend(mild_season("winter2023", 30.0));

        assert_eq!(find_optimal_seasons(&records).len(), 2);
    }

    #[test]
    fn rainfall_bounds_are_inclusive() {
        let mut records: Vec<WeatherRecord> = (0..4)
            .map(|day| record("spring2024", day, 25.0, 5.0, 20.0))
            .collect();
        records.extend((0..4).map(|day| record("fall2024", day, 22.0, 20.0, 20.0)));

        assert_eq!(find_optimal_seasons(&records).len(), 2);
    }

    #[test]
    fn wind_limit_is_inclusive() {
        let records: Vec<WeatherRecord> = (0..4)
            .map(|day| record("summer2024", day, 25.0, 10.0, 30.0))
            .collect();

        let seasons = find_optimal_seasons(&records);
        assert_eq!(seasons.len(), 1);
        assert_eq!(seasons[0].max_wind_speed, 30.0);
    }

    #[test]
    fn single_violent_wind_day_disqualifies_a_calm_season() {
        // the average wind is well under the limit; the peak is what counts
        let records = vec![
            record("gusty2023", 0, 25.0, 10.0, 10.0),
            record("gusty2023", 1, 25.0, 10.0, 40.0),
            record("gusty2023", 2, 25.0, 10.0, 10.0),
        ];
        assert!(find_optimal_seasons(&records).is_empty());
    }

    #[test]
    fn out_of_band_averages_disqualify() {
        assert!(find_optimal_seasons(&mild_season("cold2023", 12.0)).is_empty());
        assert!(find_optimal_seasons(&mild_season("scorched2023", 38.0)).is_empty());
    }

    #[test]
    fn empty_history_qualifies_nothing() {
        assert!(find_optimal_seasons(&[]).is_empty());
    }

    #[test]
    fn equal_temperatures_order_by_season_id() {
        let mut records = mild_season("b-season", 24.0);
        records.extend(mild_season("a-season", 24.0));

        let ids: Vec<String> = find_optimal_seasons(&records)
            .into_iter()
            .map(|s| s.season_id)
            .collect();
        assert_eq!(ids, ["a-season", "b-season"]);
    }
}

// =============================================================================
// Aggregation semantics
// =============================================================================

mod aggregation {
    use super::*;

    #[test]
    fn averages_temperature_and_rainfall_takes_peak_wind() {
        let records = vec![
            record("spring2023", 0, 20.0, 5.0, 10.0),
            record("spring2023", 1, 30.0, 15.0, 25.0),
        ];

        let summaries = summarize_seasons(&records);
        assert_eq!(summaries.len(), 1);

        let summary = &summaries[0];
        assert_eq!(summary.avg_temperature, 25.0);
        assert_eq!(summary.avg_rainfall, 10.0);
        assert_eq!(summary.max_wind_speed, 25.0);
    }

    #[test]
    fn reused_season_id_merges_across_submissions() {
        // two runs tagged with the same season accumulate into one group
        let mut records = mild_season("spring2023", 24.0);
        records.extend(mild_season("spring2023", 28.0));

        let summaries = summarize_seasons(&records);
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].avg_temperature, 26.0);
    }

    #[test]
    fn seasons_group_independently() {
        let mut records = mild_season("spring2023", 25.0);
        records.extend(mild_season("arctic2023", -10.0));

        assert_eq!(summarize_seasons(&records).len(), 2);
    }
}

// =============================================================================
// Criteria echo
// =============================================================================

mod criteria {
    use super::*;

    #[test]
    fn criteria_echo_the_fixed_thresholds() {
        let criteria = PlantingCriteria::default();
        assert_eq!(criteria.temperature_range, "20°C to 30°C");
        assert_eq!(criteria.rainfall_range, "5mm to 20mm");
        assert_eq!(criteria.max_wind_speed_threshold, "<= 30 km/h");
    }
}

// =============================================================================
// Property Tests
// =============================================================================

fn arbitrary_records() -> impl Strategy<Value = Vec<WeatherRecord>> {
    proptest::collection::vec(
        (0u8..5, 0..30i32, -10.0..45.0f64, 0.0..40.0f64, 0.0..60.0f64).prop_map(
            |(season, day, temperature, rainfall_mm, wind_speed_kmh)| WeatherRecord {
                season_id: format!("season-{season}"),
                day,
                temperature,
                rainfall_mm,
                wind_speed_kmh,
            },
        ),
        0..60,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every survivor satisfies all three thresholds at once
    #[test]
    fn prop_survivors_satisfy_every_threshold(records in arbitrary_records()) {
        for summary in find_optimal_seasons(&records) {
            prop_assert!(summary.avg_temperature >= 20.0 && summary.avg_temperature <= 30.0);
            prop_assert!(summary.avg_rainfall >= 5.0 && summary.avg_rainfall <= 20.0);
            prop_assert!(summary.max_wind_speed <= 30.0);
        }
    }

    /// Survivors come back sorted by average temperature, ascending
    #[test]
    fn prop_output_sorted_by_temperature(records in arbitrary_records()) {
        let seasons = find_optimal_seasons(&records);
        prop_assert!(seasons
            .windows(2)
            .all(|pair| pair[0].avg_temperature <= pair[1].avg_temperature));
    }

    /// Summaries cover exactly the distinct season ids in the input
    #[test]
    fn prop_summary_count_matches_distinct_seasons(records in arbitrary_records()) {
        let distinct: std::collections::BTreeSet<&str> =
            records.iter().map(|r| r.season_id.as_str()).collect();
        prop_assert_eq!(summarize_seasons(&records).len(), distinct.len());
    }
}

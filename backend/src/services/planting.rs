//! Optimal planting window service: qualifies recorded seasons

use serde::Serialize;
use sqlx::PgPool;

use shared::{find_optimal_seasons, PlantingCriteria, SeasonSummary, WeatherRecord};

use crate::error::{AppError, AppResult};

/// Planting service for qualifying recorded seasons
#[derive(Clone)]
pub struct PlantingService {
    db: PgPool,
}

/// Database row for a persisted weather record
#[derive(Debug, sqlx::FromRow)]
struct WeatherRecordRow {
    season_id: String,
    day: i32,
    temperature: f64,
    rainfall_mm: f64,
    wind_speed_kmh: f64,
}

impl From<WeatherRecordRow> for WeatherRecord {
    fn from(row: WeatherRecordRow) -> Self {
        Self {
            season_id: row.season_id,
            day: row.day,
            temperature: row.temperature,
            rainfall_mm: row.rainfall_mm,
            wind_speed_kmh: row.wind_speed_kmh,
        }
    }
}

/// Query result for the optimal planting window report
#[derive(Debug, Serialize)]
pub struct OptimalPlantingReport {
    pub optimal_seasons: Vec<SeasonSummary>,
    pub total_seasons_analyzed: usize,
    pub criteria: PlantingCriteria,
}

impl PlantingService {
    /// Create a new PlantingService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Summarize every recorded season and report the ones inside the
    /// optimal planting window.
    ///
    /// Reads all weather records and reduces them in process; summaries are
    /// recomputed on every call, never cached. Zero qualifying seasons is a
    /// NotFound outcome rather than an empty success payload.
    pub async fn find_optimal_seasons(&self) -> AppResult<OptimalPlantingReport> {
        let rows = sqlx::query_as::<_, WeatherRecordRow>(
            r#"
            SELECT season_id, day, temperature, rainfall_mm, wind_speed_kmh
            FROM weather_records
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        let records: Vec<WeatherRecord> = rows.into_iter().map(WeatherRecord::from).collect();
        let optimal_seasons = find_optimal_seasons(&records);

        if optimal_seasons.is_empty() {
            return Err(AppError::NotFound("Optimal planting seasons".to_string()));
        }

        Ok(OptimalPlantingReport {
            total_seasons_analyzed: optimal_seasons.len(),
            optimal_seasons,
            criteria: PlantingCriteria::default(),
        })
    }
}

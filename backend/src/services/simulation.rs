//! Yield simulation service: computes season totals and records the run

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use shared::{
    compute_yield, validate_simulation_request, DailyWeatherObservation, SimulationRequest,
    WeatherRecord,
};

use crate::error::{AppError, AppResult};

/// Simulation service for running and persisting yield simulations
#[derive(Clone)]
pub struct SimulationService {
    db: PgPool,
}

/// A recorded simulation run.
///
/// `total_apples_yielded` is always the yield model's output for this run's
/// own inputs; it is computed here and never accepted from a caller.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationRun {
    pub id: Uuid,
    pub season_id: String,
    pub tree_count: i32,
    pub apples_per_tree: i32,
    pub season_length_days: i32,
    pub weather_data: Vec<DailyWeatherObservation>,
    pub total_apples_yielded: i64,
    pub created_at: DateTime<Utc>,
}

/// Database row for a simulation run
#[derive(Debug, sqlx::FromRow)]
struct SimulationRunRow {
    id: Uuid,
    season_id: String,
    tree_count: i32,
    apples_per_tree: i32,
    season_length_days: i32,
    weather_data: Json<Vec<DailyWeatherObservation>>,
    total_apples_yielded: i64,
    created_at: DateTime<Utc>,
}

impl From<SimulationRunRow> for SimulationRun {
    fn from(row: SimulationRunRow) -> Self {
        Self {
            id: row.id,
            season_id: row.season_id,
            tree_count: row.tree_count,
            apples_per_tree: row.apples_per_tree,
            season_length_days: row.season_length_days,
            weather_data: row.weather_data.0,
            total_apples_yielded: row.total_apples_yielded,
            created_at: row.created_at,
        }
    }
}

impl SimulationService {
    /// Create a new SimulationService instance
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Validate the request, compute the season total, and persist the run
    /// together with one weather record per simulated day.
    ///
    /// The run row and the weather rows are written as independent
    /// statements, not one transaction. A failure part-way through leaves
    /// the earlier writes committed and surfaces the error unchanged.
    pub async fn simulate_and_record(
        &self,
        request: SimulationRequest,
    ) -> AppResult<SimulationRun> {
        validate_simulation_request(&request)
            .map_err(|message| AppError::ValidationError(message.to_string()))?;

        let total_apples_yielded = compute_yield(
            request.tree_count,
            request.apples_per_tree,
            &request.weather_data,
        );

        let run = sqlx::query_as::<_, SimulationRunRow>(
            r#"
            INSERT INTO simulation_runs
                (id, season_id, tree_count, apples_per_tree, season_length_days,
                 weather_data, total_apples_yielded)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, season_id, tree_count, apples_per_tree, season_length_days,
                      weather_data, total_apples_yielded, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&request.season_id)
        .bind(request.tree_count)
        .bind(request.apples_per_tree)
        .bind(request.season_length_days)
        .bind(Json(&request.weather_data))
        .bind(total_apples_yielded)
        .fetch_one(&self.db)
        .await?;

        for record in WeatherRecord::tag_observations(&request.season_id, &request.weather_data) {
            self.insert_weather_record(&record).await?;
        }

        tracing::info!(
            season_id = %request.season_id,
            days = request.weather_data.len(),
            total_apples_yielded,
            "Recorded simulation run"
        );

        Ok(run.into())
    }

    async fn insert_weather_record(&self, record: &WeatherRecord) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO weather_records
                (id, season_id, day, temperature, rainfall_mm, wind_speed_kmh)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&record.season_id)
        .bind(record.day)
        .bind(record.temperature)
        .bind(record.rainfall_mm)
        .bind(record.wind_speed_kmh)
        .execute(&self.db)
        .await?;

        Ok(())
    }
}

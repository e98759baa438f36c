//! Aggregate statistics endpoint
//!
//! Counts languages, model implementations and translation pairs, and
//! computes the aggregate "Bridging the Divide" progress indicator as the
//! rounded mean of per-language progress scores.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use divide_common::progress::{aggregate_progress, language_progress};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::AppState;

/// Aggregate statistics response
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub total_languages: i64,
    pub languages_with_models: i64,
    /// Number of (language, model) implementations
    pub total_models: i64,
    pub total_pairs: i64,
    /// Aggregate progress indicator, 0-100
    pub progress: u8,
    pub generated_at: DateTime<Utc>,
}

/// GET /api/stats
pub async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, StatsError> {
    let total_languages: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM languages")
        .fetch_one(&state.db)
        .await
        .map_err(|e| StatsError::Database(e.to_string()))?;

    let languages_with_models: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM languages WHERE asr OR nmt OR tts")
            .fetch_one(&state.db)
            .await
            .map_err(|e| StatsError::Database(e.to_string()))?;

    let total_models: i64 = sqlx::query_scalar(
        "SELECT COALESCE(SUM(asr::int + nmt::int + tts::int), 0)::bigint FROM languages",
    )
    .fetch_one(&state.db)
    .await
    .map_err(|e| StatsError::Database(e.to_string()))?;

    let total_pairs: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM translation_pairs")
        .fetch_one(&state.db)
        .await
        .map_err(|e| StatsError::Database(e.to_string()))?;

    // Per-language progress inputs: coordinate validity, model count and
    // pair participation count
    let rows = sqlx::query_as::<_, (bool, i32, i64)>(
        "SELECT (l.latitude IS NOT NULL AND l.longitude IS NOT NULL
                 AND l.latitude BETWEEN -90 AND 90
                 AND l.longitude BETWEEN -180 AND 180) AS has_coords,
                (l.asr::int + l.nmt::int + l.tts::int) AS model_count,
                (SELECT COUNT(*) FROM translation_pairs p
                  WHERE p.source_lang_id = l.id OR p.target_lang_id = l.id) AS pair_count
         FROM languages l",
    )
    .fetch_all(&state.db)
    .await
    .map_err(|e| StatsError::Database(e.to_string()))?;

    let progress = aggregate_progress(
        rows.into_iter()
            .map(|(has_coords, model_count, pair_count)| {
                language_progress(has_coords, model_count.max(0) as u32, pair_count)
            }),
    );

    Ok(Json(StatsResponse {
        total_languages,
        languages_with_models,
        total_models,
        total_pairs,
        progress,
        generated_at: Utc::now(),
    }))
}

/// Stats API errors
#[derive(Debug)]
pub enum StatsError {
    Database(String),
}

impl IntoResponse for StatsError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            StatsError::Database(msg) => {
                error!("database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

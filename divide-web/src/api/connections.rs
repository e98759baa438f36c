//! Map connection lines
//!
//! For a selected language, returns every NMT counterpart that can be drawn
//! on the map: one row per connected language with the best-scoring pair's
//! metrics. Counterparts without valid coordinates are omitted.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use divide_common::models::LanguageConnection;
use serde_json::json;
use tracing::error;

use crate::AppState;

/// GET /api/languages/:id/connections
pub async fn language_connections(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<LanguageConnection>>, ConnectionsError> {
    // 404 for unknown languages rather than an empty list
    sqlx::query_scalar::<_, i64>("SELECT id FROM languages WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| ConnectionsError::Database(e.to_string()))?
        .ok_or(ConnectionsError::NotFound(id))?;

    let connections = sqlx::query_as::<_, LanguageConnection>(
        "SELECT c.id, c.name, c.latitude, c.longitude, c.chrf_score, c.bleu_score
         FROM (
             SELECT DISTINCT ON (other.id)
                    other.id, other.name, other.latitude, other.longitude,
                    p.chrf_plus AS chrf_score, p.spbleu AS bleu_score
             FROM translation_pairs p
             JOIN languages other
               ON other.id = CASE WHEN p.source_lang_id = $1
                                  THEN p.target_lang_id
                                  ELSE p.source_lang_id END
             WHERE (p.source_lang_id = $1 OR p.target_lang_id = $1)
               AND other.id <> $1
               AND other.latitude BETWEEN -90 AND 90
               AND other.longitude BETWEEN -180 AND 180
             ORDER BY other.id, p.chrf_plus DESC NULLS LAST
         ) c
         ORDER BY c.name",
    )
    .bind(id)
    .fetch_all(&state.db)
    .await
    .map_err(|e| ConnectionsError::Database(e.to_string()))?;

    Ok(Json(connections))
}

/// Connection API errors
#[derive(Debug)]
pub enum ConnectionsError {
    NotFound(i64),
    Database(String),
}

impl IntoResponse for ConnectionsError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ConnectionsError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Language not found: {}", id))
            }
            ConnectionsError::Database(msg) => {
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

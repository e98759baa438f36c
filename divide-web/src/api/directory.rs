//! Language directory endpoint
//!
//! Tabular view of every language with its translation quality against the
//! English baseline (the best pair whose target tag is `eng_Latn`).

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use divide_common::models::DirectoryRow;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::AppState;

/// Query parameters for the directory
#[derive(Debug, Deserialize)]
pub struct DirectoryQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,
}

fn default_page() -> i64 {
    1
}

/// Directory response with pagination metadata
#[derive(Debug, Serialize)]
pub struct DirectoryResponse {
    pub total_results: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub rows: Vec<DirectoryRow>,
}

/// GET /api/directory
///
/// Paginated table of all languages ordered by name, with the bleu/chrF++
/// scores of their best English-target pair and the TTS flag.
pub async fn directory(
    State(state): State<AppState>,
    Query(query): Query<DirectoryQuery>,
) -> Result<Json<DirectoryResponse>, DirectoryError> {
    let total_results: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM languages")
        .fetch_one(&state.db)
        .await
        .map_err(|e| DirectoryError::Database(e.to_string()))?;

    let p = calculate_pagination(total_results, query.page);

    let rows = sqlx::query_as::<_, DirectoryRow>(
        "SELECT l.id, l.name, l.iso_code, eng.spbleu AS bleu, eng.chrf_plus AS chrf, l.tts
         FROM languages l
         LEFT JOIN LATERAL (
             SELECT p.spbleu, p.chrf_plus
             FROM translation_pairs p
             WHERE p.source_lang_id = l.id AND p.target_tag = 'eng_Latn'
             ORDER BY p.chrf_plus DESC NULLS LAST
             LIMIT 1
         ) eng ON TRUE
         ORDER BY l.name
         LIMIT $1 OFFSET $2",
    )
    .bind(PAGE_SIZE)
    .bind(p.offset)
    .fetch_all(&state.db)
    .await
    .map_err(|e| DirectoryError::Database(e.to_string()))?;

    Ok(Json(DirectoryResponse {
        total_results,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        rows,
    }))
}

/// Directory API errors
#[derive(Debug)]
pub enum DirectoryError {
    Database(String),
}

impl IntoResponse for DirectoryError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            DirectoryError::Database(msg) => {
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

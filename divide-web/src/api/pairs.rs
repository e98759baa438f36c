//! Translation-pair endpoints
//!
//! Per-language pairs (with the language's role in each pair) and the
//! global paginated pair listing with name search.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use divide_common::models::{PairRole, TranslationPair};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::error;

use crate::pagination::{calculate_pagination, PAGE_SIZE};
use crate::AppState;

/// GET /api/languages/:id/translation-pairs
///
/// Returns every pair the language participates in, with quality metrics
/// and the language's role, ordered Source before Target and best chrF++
/// first within each role.
pub async fn language_translation_pairs(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<TranslationPair>>, PairsError> {
    language_exists(&state, id).await?;

    let rows = sqlx::query_as::<_, (String, String, Option<f64>, Option<f64>, String)>(
        "SELECT src.name AS source_language,
                tgt.name AS target_language,
                p.chrf_plus AS chrf_score,
                p.spbleu AS bleu_score,
                CASE WHEN src.id = $1 THEN 'Source' ELSE 'Target' END AS role
         FROM translation_pairs p
         JOIN languages src ON p.source_lang_id = src.id
         JOIN languages tgt ON p.target_lang_id = tgt.id
         WHERE src.id = $1 OR tgt.id = $1
         ORDER BY role, p.chrf_plus DESC NULLS LAST",
    )
    .bind(id)
    .fetch_all(&state.db)
    .await
    .map_err(|e| PairsError::Database(e.to_string()))?;

    let pairs = rows
        .into_iter()
        .map(
            |(source_language, target_language, chrf_score, bleu_score, role)| TranslationPair {
                source_language,
                target_language,
                chrf_score,
                bleu_score,
                role: if role == "Source" {
                    PairRole::Source
                } else {
                    PairRole::Target
                },
            },
        )
        .collect();

    Ok(Json(pairs))
}

/// Query parameters for the global pair listing
#[derive(Debug, Deserialize)]
pub struct PairsQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    pub page: i64,

    /// Case-insensitive filter on source or target language name
    pub search: Option<String>,
}

fn default_page() -> i64 {
    1
}

/// One row of the global pair listing
#[derive(Debug, Serialize)]
pub struct PairListing {
    pub source_language: String,
    pub target_language: String,
    pub chrf_score: Option<f64>,
    pub bleu_score: Option<f64>,
}

/// Global pair listing response with pagination metadata
#[derive(Debug, Serialize)]
pub struct PairsResponse {
    pub total_results: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub pairs: Vec<PairListing>,
}

/// GET /api/pairs
///
/// Paginated listing of every translation pair, best chrF++ first.
pub async fn list_pairs(
    State(state): State<AppState>,
    Query(query): Query<PairsQuery>,
) -> Result<Json<PairsResponse>, PairsError> {
    // SQL LIKE pattern from the search term, matching anywhere in the name
    let pattern = query
        .search
        .as_deref()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| format!("%{}%", s));

    let total_results: i64 = match &pattern {
        Some(pattern) => {
            sqlx::query_scalar(
                "SELECT COUNT(*)
                 FROM translation_pairs p
                 JOIN languages src ON p.source_lang_id = src.id
                 JOIN languages tgt ON p.target_lang_id = tgt.id
                 WHERE src.name ILIKE $1 OR tgt.name ILIKE $1",
            )
            .bind(pattern)
        }
        None => sqlx::query_scalar("SELECT COUNT(*) FROM translation_pairs"),
    }
    .fetch_one(&state.db)
    .await
    .map_err(|e| PairsError::Database(e.to_string()))?;

    let p = calculate_pagination(total_results, query.page);

    let rows = match &pattern {
        Some(pattern) => sqlx::query_as::<_, (String, String, Option<f64>, Option<f64>)>(
            "SELECT src.name, tgt.name, p.chrf_plus, p.spbleu
             FROM translation_pairs p
             JOIN languages src ON p.source_lang_id = src.id
             JOIN languages tgt ON p.target_lang_id = tgt.id
             WHERE src.name ILIKE $1 OR tgt.name ILIKE $1
             ORDER BY p.chrf_plus DESC NULLS LAST
             LIMIT $2 OFFSET $3",
        )
        .bind(pattern)
        .bind(PAGE_SIZE)
        .bind(p.offset),
        None => sqlx::query_as::<_, (String, String, Option<f64>, Option<f64>)>(
            "SELECT src.name, tgt.name, p.chrf_plus, p.spbleu
             FROM translation_pairs p
             JOIN languages src ON p.source_lang_id = src.id
             JOIN languages tgt ON p.target_lang_id = tgt.id
             ORDER BY p.chrf_plus DESC NULLS LAST
             LIMIT $1 OFFSET $2",
        )
        .bind(PAGE_SIZE)
        .bind(p.offset),
    }
    .fetch_all(&state.db)
    .await
    .map_err(|e| PairsError::Database(e.to_string()))?;

    let pairs = rows
        .into_iter()
        .map(
            |(source_language, target_language, chrf_score, bleu_score)| PairListing {
                source_language,
                target_language,
                chrf_score,
                bleu_score,
            },
        )
        .collect();

    Ok(Json(PairsResponse {
        total_results,
        page: p.page,
        page_size: PAGE_SIZE,
        total_pages: p.total_pages,
        pairs,
    }))
}

/// 404 unless the language id exists
async fn language_exists(state: &AppState, id: i64) -> Result<(), PairsError> {
    sqlx::query_scalar::<_, i64>("SELECT id FROM languages WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| PairsError::Database(e.to_string()))?
        .map(|_| ())
        .ok_or(PairsError::LanguageNotFound(id))
}

/// Pair API errors
#[derive(Debug)]
pub enum PairsError {
    LanguageNotFound(i64),
    Database(String),
}

impl IntoResponse for PairsError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            PairsError::LanguageNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Language not found: {}", id))
            }
            PairsError::Database(msg) => {
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

//! Language listing and detail endpoints
//!
//! The list endpoint feeds the world map: only languages with valid
//! coordinates appear, optionally filtered by model availability. The
//! detail endpoint returns the full profile of one language including its
//! computed progress score.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use divide_common::models::{LanguageDetail, LanguageSummary, ModelKind};
use divide_common::progress::language_progress;
use serde::Deserialize;
use serde_json::json;
use sqlx::FromRow;
use tracing::error;

use crate::AppState;

/// Query parameters for the language list
#[derive(Debug, Deserialize)]
pub struct LanguagesQuery {
    /// Model filter: "asr", "nmt", "tts" or "all"
    pub model: Option<String>,
}

/// GET /api/languages
///
/// Returns the map dataset: every language with valid coordinates,
/// optionally restricted to languages with a given model (or any model
/// when `model=all`). Ordered by language name.
pub async fn list_languages(
    State(state): State<AppState>,
    Query(query): Query<LanguagesQuery>,
) -> Result<Json<Vec<LanguageSummary>>, LanguageError> {
    let mut sql = String::from(
        "SELECT l.id, l.name, l.iso_code, l.latitude, l.longitude,
                l.asr, l.nmt, l.tts,
                array_remove(ARRAY[
                    CASE WHEN l.asr THEN 'ASR' END,
                    CASE WHEN l.nmt THEN 'NMT' END,
                    CASE WHEN l.tts THEN 'TTS' END
                ], NULL) AS available_models,
                (SELECT COUNT(*) FROM translation_pairs p
                  WHERE p.source_lang_id = l.id OR p.target_lang_id = l.id) AS nmt_pair_count
         FROM languages l
         WHERE l.latitude IS NOT NULL AND l.longitude IS NOT NULL
           AND l.latitude BETWEEN -90 AND 90
           AND l.longitude BETWEEN -180 AND 180",
    );

    match query.model.as_deref() {
        None => {}
        Some(value) if value.eq_ignore_ascii_case("all") => {
            sql.push_str(" AND (l.asr OR l.nmt OR l.tts)");
        }
        Some(value) => {
            // Filter column comes from the enum, never from the request
            let kind = ModelKind::parse(value)
                .ok_or_else(|| LanguageError::InvalidModel(value.to_string()))?;
            sql.push_str(&format!(" AND l.{} = TRUE", kind.column()));
        }
    }

    sql.push_str(" ORDER BY l.name");

    let languages = sqlx::query_as::<_, LanguageSummary>(&sql)
        .fetch_all(&state.db)
        .await
        .map_err(|e| LanguageError::Database(e.to_string()))?;

    Ok(Json(languages))
}

/// Detail row as selected from the database, before progress scoring
#[derive(Debug, FromRow)]
struct DetailRow {
    id: i64,
    name: String,
    iso_code: Option<String>,
    glottocode: Option<String>,
    family_id: Option<i64>,
    family_name: Option<String>,
    subfamily_id: Option<i64>,
    subfamily_name: Option<String>,
    latitude: Option<f64>,
    longitude: Option<f64>,
    asr: bool,
    nmt: bool,
    tts: bool,
    asr_url: Option<String>,
    nmt_url: Option<String>,
    tts_url: Option<String>,
    available_models: Vec<String>,
    nmt_pair_count: i64,
}

/// GET /api/languages/:id
///
/// Returns the full language profile with family/subfamily references,
/// model URLs, pair count and the computed progress score.
pub async fn get_language(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LanguageDetail>, LanguageError> {
    let row = sqlx::query_as::<_, DetailRow>(
        "SELECT l.id, l.name, l.iso_code, l.glottocode,
                lf.id AS family_id, lf.name AS family_name,
                ls.id AS subfamily_id, ls.name AS subfamily_name,
                l.latitude, l.longitude,
                l.asr, l.nmt, l.tts,
                l.asr_url, l.nmt_url, l.tts_url,
                array_remove(ARRAY[
                    CASE WHEN l.asr THEN 'ASR' END,
                    CASE WHEN l.nmt THEN 'NMT' END,
                    CASE WHEN l.tts THEN 'TTS' END
                ], NULL) AS available_models,
                (SELECT COUNT(*) FROM translation_pairs p
                  WHERE p.source_lang_id = l.id OR p.target_lang_id = l.id) AS nmt_pair_count
         FROM languages l
         LEFT JOIN language_families lf ON l.family_id = lf.id
         LEFT JOIN language_subfamilies ls ON l.subfamily_id = ls.id
         WHERE l.id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| LanguageError::Database(e.to_string()))?
    .ok_or(LanguageError::NotFound(id))?;

    let progress = language_progress(
        valid_coordinates(row.latitude, row.longitude),
        row.available_models.len() as u32,
        row.nmt_pair_count,
    );

    Ok(Json(LanguageDetail {
        id: row.id,
        name: row.name,
        iso_code: row.iso_code,
        glottocode: row.glottocode,
        family_id: row.family_id,
        family_name: row.family_name,
        subfamily_id: row.subfamily_id,
        subfamily_name: row.subfamily_name,
        latitude: row.latitude,
        longitude: row.longitude,
        asr: row.asr,
        nmt: row.nmt,
        tts: row.tts,
        asr_url: row.asr_url,
        nmt_url: row.nmt_url,
        tts_url: row.tts_url,
        available_models: row.available_models,
        nmt_pair_count: row.nmt_pair_count,
        progress,
    }))
}

/// A coordinate pair is valid when both values are present and in range
pub(crate) fn valid_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> bool {
    matches!((latitude, longitude), (Some(lat), Some(lon))
        if (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon))
}

/// Language API errors
#[derive(Debug)]
pub enum LanguageError {
    InvalidModel(String),
    NotFound(i64),
    Database(String),
}

impl IntoResponse for LanguageError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            LanguageError::InvalidModel(model) => (
                StatusCode::BAD_REQUEST,
                format!("Invalid model filter: {}", model),
            ),
            LanguageError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Language not found: {}", id))
            }
            LanguageError::Database(msg) => {
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

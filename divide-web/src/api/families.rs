//! Language family and subfamily listings

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use divide_common::models::FamilyLanguage;
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::AppState;

/// Family or subfamily listing response
#[derive(Debug, Serialize)]
pub struct FamilyResponse {
    pub id: i64,
    pub name: String,
    pub languages: Vec<FamilyLanguage>,
}

/// GET /api/family/:id
///
/// All languages of a family, ordered by name.
pub async fn family_languages(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FamilyResponse>, FamilyError> {
    let name: String = sqlx::query_scalar("SELECT name FROM language_families WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| FamilyError::Database(e.to_string()))?
        .ok_or(FamilyError::FamilyNotFound(id))?;

    let languages = fetch_member_languages(&state, "family_id", id).await?;

    Ok(Json(FamilyResponse { id, name, languages }))
}

/// GET /api/subfamily/:id
///
/// All languages of a subfamily, ordered by name.
pub async fn subfamily_languages(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<FamilyResponse>, FamilyError> {
    let name: String = sqlx::query_scalar("SELECT name FROM language_subfamilies WHERE id = $1")
        .bind(id)
        .fetch_optional(&state.db)
        .await
        .map_err(|e| FamilyError::Database(e.to_string()))?
        .ok_or(FamilyError::SubfamilyNotFound(id))?;

    let languages = fetch_member_languages(&state, "subfamily_id", id).await?;

    Ok(Json(FamilyResponse { id, name, languages }))
}

/// Fetch the languages referencing a family or subfamily
///
/// `column` is one of the two fixed FK column names, never request input.
async fn fetch_member_languages(
    state: &AppState,
    column: &str,
    id: i64,
) -> Result<Vec<FamilyLanguage>, FamilyError> {
    sqlx::query_as::<_, FamilyLanguage>(&format!(
        "SELECT l.id, l.name, l.iso_code, l.asr, l.nmt, l.tts,
                array_remove(ARRAY[
                    CASE WHEN l.asr THEN 'ASR' END,
                    CASE WHEN l.nmt THEN 'NMT' END,
                    CASE WHEN l.tts THEN 'TTS' END
                ], NULL) AS available_models
         FROM languages l
         WHERE l.{} = $1
         ORDER BY l.name",
        column
    ))
    .bind(id)
    .fetch_all(&state.db)
    .await
    .map_err(|e| FamilyError::Database(e.to_string()))
}

/// Family API errors
#[derive(Debug)]
pub enum FamilyError {
    FamilyNotFound(i64),
    SubfamilyNotFound(i64),
    Database(String),
}

impl IntoResponse for FamilyError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            FamilyError::FamilyNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Family not found: {}", id))
            }
            FamilyError::SubfamilyNotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Subfamily not found: {}", id))
            }
            FamilyError::Database(msg) => {
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

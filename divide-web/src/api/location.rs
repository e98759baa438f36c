//! Reverse-geocoding proxy
//!
//! Resolves a language's coordinates to a human-readable place name via the
//! OpenStreetMap Nominatim API, so the UI never talks to the geocoder
//! directly.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::time::Duration;
use tracing::error;

use super::languages::valid_coordinates;
use crate::AppState;

const NOMINATIM_URL: &str = "https://nominatim.openstreetmap.org/reverse";

/// Relevant subset of the Nominatim reverse-geocoding payload
#[derive(Debug, Deserialize)]
struct NominatimResponse {
    display_name: Option<String>,
}

/// Location response
#[derive(Debug, Serialize)]
pub struct LocationResponse {
    pub display_name: Option<String>,
}

/// GET /api/languages/:id/location
///
/// 404 when the language is unknown or has no valid coordinates, 502 when
/// the geocoder is unreachable.
pub async fn language_location(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<LocationResponse>, LocationError> {
    let coords = sqlx::query_as::<_, (Option<f64>, Option<f64>)>(
        "SELECT latitude, longitude FROM languages WHERE id = $1",
    )
    .bind(id)
    .fetch_optional(&state.db)
    .await
    .map_err(|e| LocationError::Database(e.to_string()))?
    .ok_or(LocationError::NotFound(id))?;

    let (latitude, longitude) = coords;
    if !valid_coordinates(latitude, longitude) {
        return Err(LocationError::NoCoordinates(id));
    }

    let client = reqwest::Client::builder()
        .user_agent(concat!("digitaldivide.ai/", env!("CARGO_PKG_VERSION")))
        .timeout(Duration::from_secs(10))
        .build()
        .map_err(|e| LocationError::Upstream(e.to_string()))?;

    let response = client
        .get(NOMINATIM_URL)
        .query(&[
            ("format", "jsonv2".to_string()),
            ("lat", latitude.unwrap_or_default().to_string()),
            ("lon", longitude.unwrap_or_default().to_string()),
        ])
        .send()
        .await
        .map_err(|e| LocationError::Upstream(e.to_string()))?
        .error_for_status()
        .map_err(|e| LocationError::Upstream(e.to_string()))?;

    let payload: NominatimResponse = response
        .json()
        .await
        .map_err(|e| LocationError::Upstream(e.to_string()))?;

    Ok(Json(LocationResponse {
        display_name: payload.display_name,
    }))
}

/// Location API errors
#[derive(Debug)]
pub enum LocationError {
    NotFound(i64),
    NoCoordinates(i64),
    Database(String),
    Upstream(String),
}

impl IntoResponse for LocationError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            LocationError::NotFound(id) => {
                (StatusCode::NOT_FOUND, format!("Language not found: {}", id))
            }
            LocationError::NoCoordinates(id) => (
                StatusCode::NOT_FOUND,
                format!("Language has no valid coordinates: {}", id),
            ),
            LocationError::Database(msg) => {
                error!("database error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Database error".to_string())
            }
            LocationError::Upstream(msg) => {
                error!("geocoder error: {}", msg);
                (StatusCode::BAD_GATEWAY, "Geocoder unavailable".to_string())
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

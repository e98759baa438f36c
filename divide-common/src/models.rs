//! Domain models shared between the HTTP handlers and the tests

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// The three language technologies tracked by the atlas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelKind {
    #[serde(rename = "ASR")]
    Asr,
    #[serde(rename = "NMT")]
    Nmt,
    #[serde(rename = "TTS")]
    Tts,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Asr, ModelKind::Nmt, ModelKind::Tts];

    /// Display label, as stored in `available_models` arrays
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Asr => "ASR",
            ModelKind::Nmt => "NMT",
            ModelKind::Tts => "TTS",
        }
    }

    /// Column name of the availability flag in the `languages` table
    pub fn column(&self) -> &'static str {
        match self {
            ModelKind::Asr => "asr",
            ModelKind::Nmt => "nmt",
            ModelKind::Tts => "tts",
        }
    }

    /// Parse a case-insensitive model name ("asr", "NMT", ...)
    pub fn parse(s: &str) -> Option<ModelKind> {
        match s.to_ascii_lowercase().as_str() {
            "asr" => Some(ModelKind::Asr),
            "nmt" => Some(ModelKind::Nmt),
            "tts" => Some(ModelKind::Tts),
            _ => None,
        }
    }
}

/// One language row of the map dataset (`GET /api/languages`)
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LanguageSummary {
    pub id: i64,
    pub name: String,
    pub iso_code: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
    pub asr: bool,
    pub nmt: bool,
    pub tts: bool,
    pub available_models: Vec<String>,
    pub nmt_pair_count: i64,
}

/// Full language profile (`GET /api/languages/:id`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LanguageDetail {
    pub id: i64,
    pub name: String,
    pub iso_code: Option<String>,
    pub glottocode: Option<String>,
    pub family_id: Option<i64>,
    pub family_name: Option<String>,
    pub subfamily_id: Option<i64>,
    pub subfamily_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub asr: bool,
    pub nmt: bool,
    pub tts: bool,
    pub asr_url: Option<String>,
    pub nmt_url: Option<String>,
    pub tts_url: Option<String>,
    pub available_models: Vec<String>,
    pub nmt_pair_count: i64,
    /// Progress toward full language support, 0-100
    pub progress: u8,
}

/// Which side of a translation pair the queried language is on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PairRole {
    Source,
    Target,
}

/// Translation pair with quality metrics, relative to one language
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationPair {
    pub source_language: String,
    pub target_language: String,
    pub chrf_score: Option<f64>,
    pub bleu_score: Option<f64>,
    pub role: PairRole,
}

/// Language row of a family or subfamily listing
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FamilyLanguage {
    pub id: i64,
    pub name: String,
    pub iso_code: Option<String>,
    pub asr: bool,
    pub nmt: bool,
    pub tts: bool,
    pub available_models: Vec<String>,
}

/// Directory row: per-language quality against the English baseline
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DirectoryRow {
    pub id: i64,
    pub name: String,
    pub iso_code: Option<String>,
    pub bleu: Option<f64>,
    pub chrf: Option<f64>,
    pub tts: bool,
}

/// NMT counterpart of a language, for drawing map connection lines
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LanguageConnection {
    pub id: i64,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub chrf_score: Option<f64>,
    pub bleu_score: Option<f64>,
}

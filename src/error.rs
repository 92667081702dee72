//! Error types for the FPL expected-points tool

use thiserror::Error;


pub type Result<T> = std::result::Result<T, XptsError>;

#[derive(Error, Debug)]
pub enum XptsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse id: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Invalid element_type {code}: expected 1 (GK), 2 (DEF), 3 (MID) or 4 (FWD)")]
    InvalidPositionCode { code: i64 },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid gameweek {value:?}: expected \"season\" or a gameweek number")]
    InvalidGameweek { value: String },

    #[error("Malformed numeric field {field}: {value:?}")]
    MalformedNumericField { field: &'static str, value: String },

    #[error("Player not found: {id}")]
    PlayerNotFound { id: u32 },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidConfig { key: &'static str, value: String },
}

pub mod config;
pub mod scoring;
// cmd and reports are binary modules (declared in main.rs).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GoScoreError {
    #[error("Invalid scoring method: '{0}' (expected 'area' or 'territory')")]
    InvalidMethod(String),

    #[error("Incomplete score data: {0}")]
    IncompleteScoreData(String),

    #[error("Invalid komi: {0} (must be a finite number)")]
    InvalidKomi(f64),

    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration Error: {0}")]
    Config(String),
}

pub type GsResult<T> = Result<T, GoScoreError>;

pub use scoring::{compute_result, compute_result_str, ScoreBreakdown, ScoreResult, ScoringMethod};

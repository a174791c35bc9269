//! Error types for Orate

use thiserror::Error;

/// Errors that can occur at the crate boundary.
///
/// Analyzers themselves never fail: insufficient or missing data degrades to
/// a neutral default score plus explanatory feedback. Errors only arise when
/// parsing collaborator payloads or encoding output.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Failed to parse session payload: {0}")]
    ParseError(String),

    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Invalid session: {0}")]
    InvalidSession(String),

    #[error("Encoding error: {0}")]
    EncodingError(String),
}

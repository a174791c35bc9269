//! Session intake
//!
//! Parses a recording collaborator's JSON payload into an [`AnalysisInput`]
//! and checks the shape-level invariants the engine relies on.

use crate::error::AnalysisError;
use crate::types::AnalysisInput;

/// Parse a recording session JSON string into an AnalysisInput
pub fn parse_session(json: &str) -> Result<AnalysisInput, AnalysisError> {
    let input: AnalysisInput = serde_json::from_str(json)
        .map_err(|e| AnalysisError::ParseError(format!("Failed to parse session: {}", e)))?;
    validate_session(&input)?;
    Ok(input)
}

/// Validate the shape-level invariants of a parsed session.
///
/// Word-timing chronology (`start[i] >= end[i-1]`, `start <= end`) is a
/// precondition on the transcription collaborator. Release builds trust it;
/// analyzer behavior on non-chronological timings is unspecified.
pub fn validate_session(input: &AnalysisInput) -> Result<(), AnalysisError> {
    if input.duration_ms == 0 && !input.words.is_empty() {
        return Err(AnalysisError::InvalidSession(
            "duration_ms is zero but word timings are present".to_string(),
        ));
    }

    for sample in &input.volume_history {
        if !(0.0..=100.0).contains(&sample.level) {
            return Err(AnalysisError::InvalidSession(format!(
                "volume level {} outside 0-100 at t={}",
                sample.level, sample.timestamp
            )));
        }
    }

    debug_assert!(
        input
            .words
            .windows(2)
            .all(|w| w[1].start >= w[0].end && w[0].start <= w[0].end),
        "word timings must be chronological"
    );

    Ok(())
}

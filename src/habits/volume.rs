//! Volume analysis
//!
//! Scores loudness level, consistency, and end-of-recording trail-off from
//! the collaborator's volume trace.

use crate::stats;
use crate::types::{VolumeAnalysis, VolumeSample};

/// Minimum samples for a meaningful volume profile
const MIN_SAMPLES: usize = 5;

/// Mean level below this is too quiet
const QUIET_LEVEL: f64 = 15.0;

/// Ideal loudness band
const IDEAL_LOW: f64 = 25.0;
const IDEAL_HIGH: f64 = 60.0;

/// Mean level above this risks clipping
const LOUD_LEVEL: f64 = 80.0;

/// Variation (cv percent) above this is inconsistent
const MAX_VARIATION: f64 = 50.0;

/// Analyze loudness patterns over the volume trace.
pub fn analyze_volume_patterns(volume_history: &[VolumeSample]) -> VolumeAnalysis {
    if volume_history.len() < MIN_SAMPLES {
        return VolumeAnalysis {
            volume_score: 50.0,
            average_volume: 0.0,
            volume_variation: 0.0,
            has_trailing_off: false,
            levels: volume_history.iter().map(|s| s.level).collect(),
            feedback: "Not enough volume data to analyze.".to_string(),
        };
    }

    let levels: Vec<f64> = volume_history.iter().map(|s| s.level).collect();
    let average = stats::mean(&levels);
    let variation = stats::coefficient_of_variation(&levels);
    let has_trailing_off = detect_trailing_off(&levels);

    let score = compute_volume_score(average, variation, has_trailing_off);
    let feedback = volume_feedback(average, variation, has_trailing_off);

    VolumeAnalysis {
        volume_score: score,
        average_volume: average,
        volume_variation: variation,
        has_trailing_off,
        levels,
        feedback,
    }
}

/// Compare the mean of the first 80% of samples against the last 20%.
///
/// Trail-off requires an audible opening (mean above 15) that drops to under
/// 60% of itself by the end.
fn detect_trailing_off(levels: &[f64]) -> bool {
    let split = levels.len() * 4 / 5;
    if split == 0 || split == levels.len() {
        return false;
    }
    let avg_first = stats::mean(&levels[..split]);
    let avg_last = stats::mean(&levels[split..]);
    avg_first > QUIET_LEVEL && avg_last < avg_first * 0.6
}

/// Score loudness: banded base, then trail-off and inconsistency penalties
fn compute_volume_score(average: f64, variation: f64, has_trailing_off: bool) -> f64 {
    let mut score = if average < QUIET_LEVEL {
        40.0 + average
    } else if (IDEAL_LOW..=IDEAL_HIGH).contains(&average) {
        90.0
    } else if average > LOUD_LEVEL {
        75.0
    } else {
        70.0
    };

    if has_trailing_off {
        score -= 15.0;
    }
    if variation > MAX_VARIATION {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}

/// Feedback in priority order
fn volume_feedback(average: f64, variation: f64, has_trailing_off: bool) -> String {
    if average < QUIET_LEVEL {
        return "You're speaking too quietly. Project so the back of the room hears you."
            .to_string();
    }
    if has_trailing_off {
        return "Your volume trails off toward the end. Hold your energy through the final point."
            .to_string();
    }
    if variation > MAX_VARIATION {
        return "Your volume swings a lot. Keep a steadier level and save the peaks for emphasis."
            .to_string();
    }
    "Strong, consistent volume throughout.".to_string()
}

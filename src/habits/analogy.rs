//! Analogy detection
//!
//! Counts comparative and metaphorical marker phrases. The score ladder
//! rewards a few vivid comparisons and tapers past five - overuse dilutes
//! them.

use crate::types::AnalogyAnalysis;
use once_cell::sync::Lazy;
use regex::Regex;

/// Markers of comparative or metaphorical language
const ANALOGY_MARKERS: [&str; 12] = [
    "like a",
    "it's like",
    "just like",
    "as if",
    "imagine",
    "picture this",
    "think of it as",
    "similar to",
    "analogous to",
    "in the same way",
    "metaphorically",
    "it's as though",
];

static ANALOGY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    ANALOGY_MARKERS
        .iter()
        .map(|phrase| {
            let words: Vec<String> = phrase.split_whitespace().map(regex::escape).collect();
            let pattern = format!(r"(?i)\b{}\b", words.join(r"\s+"));
            Regex::new(&pattern).expect("static analogy pattern")
        })
        .collect()
});

/// Detect comparative/metaphorical language in the transcript.
pub fn detect_analogies(transcript: &str) -> AnalogyAnalysis {
    let analogy_count: u32 = ANALOGY_PATTERNS
        .iter()
        .map(|p| p.find_iter(transcript).count() as u32)
        .sum();

    AnalogyAnalysis {
        analogy_score: analogy_score(analogy_count),
        analogy_count,
        feedback: analogy_feedback(analogy_count),
    }
}

/// Tier ladder, evaluated top-down
fn analogy_score(count: u32) -> f64 {
    if count > 5 {
        90.0
    } else if count >= 3 {
        95.0
    } else if count >= 2 {
        85.0
    } else if count >= 1 {
        70.0
    } else {
        50.0
    }
}

fn analogy_feedback(count: u32) -> String {
    match count {
        0 => "No analogies. A vivid comparison can make an abstract point stick.".to_string(),
        1..=2 => "Nice use of comparison. Keep reaching for concrete images.".to_string(),
        _ => "Excellent use of analogies to make your points vivid.".to_string(),
    }
}

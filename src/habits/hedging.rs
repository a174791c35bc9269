//! Hedging detection
//!
//! Counts confidence-undermining phrases and scores declarative delivery.
//! Each phrase compiles once into a case-insensitive, whitespace-tolerant,
//! word-bounded regex.

use crate::types::{HedgeOccurrence, HedgingAnalysis};
use once_cell::sync::Lazy;
use regex::Regex;

/// Hedging phrases that undermine declarative delivery
const HEDGING_PHRASES: [&str; 16] = [
    "kind of",
    "sort of",
    "i think maybe",
    "i guess",
    "maybe",
    "probably",
    "possibly",
    "perhaps",
    "i feel like",
    "it seems like",
    "i'm not sure",
    "i could be wrong",
    "might be",
    "a little bit",
    "just my opinion",
    "or something",
];

static HEDGE_PATTERNS: Lazy<Vec<(&'static str, Regex)>> = Lazy::new(|| {
    HEDGING_PHRASES
        .iter()
        .map(|phrase| {
            let words: Vec<String> = phrase
                .split_whitespace()
                .map(regex::escape)
                .collect();
            let pattern = format!(r"(?i)\b{}\b", words.join(r"\s+"));
            (*phrase, Regex::new(&pattern).expect("static hedge pattern"))
        })
        .collect()
});

/// Detect hedging phrases and score declarative confidence.
pub fn detect_hedging(transcript: &str) -> HedgingAnalysis {
    let mut occurrences: Vec<HedgeOccurrence> = Vec::new();

    for (phrase, pattern) in HEDGE_PATTERNS.iter() {
        let count = pattern.find_iter(transcript).count() as u32;
        if count > 0 {
            occurrences.push(HedgeOccurrence {
                phrase: phrase.to_string(),
                count,
            });
        }
    }

    occurrences.sort_by(|a, b| b.count.cmp(&a.count).then(a.phrase.cmp(&b.phrase)));

    let hedging_count: u32 = occurrences.iter().map(|o| o.count).sum();
    let word_count = transcript.split_whitespace().count();

    let declarative_score = compute_declarative_score(hedging_count, word_count);
    let feedback = hedging_feedback(hedging_count, &occurrences);

    HedgingAnalysis {
        declarative_score,
        hedging_count,
        occurrences,
        feedback,
    }
}

/// Score declarative confidence.
///
/// `100 - (hedges/words)*400 - hedges*3`, clamped to 0-100. An empty
/// transcript contributes a density of zero.
fn compute_declarative_score(hedging_count: u32, word_count: usize) -> f64 {
    let density = if word_count > 0 {
        hedging_count as f64 / word_count as f64
    } else {
        0.0
    };
    (100.0 - density * 400.0 - hedging_count as f64 * 3.0).clamp(0.0, 100.0)
}

/// Feedback tiers by total hedge count
fn hedging_feedback(hedging_count: u32, occurrences: &[HedgeOccurrence]) -> String {
    match hedging_count {
        0 => "Confident, declarative delivery with no hedging.".to_string(),
        1..=2 => "Only minor hedging. Your statements mostly land with confidence.".to_string(),
        3..=5 => {
            let top = &occurrences[0];
            format!(
                "You leaned on \"{}\" {} times. Drop it and state the point directly.",
                top.phrase, top.count
            )
        }
        _ => "Frequent hedging is softening your message. Use more declarative statements."
            .to_string(),
    }
}

//! Filler-word detection
//!
//! Counts a fixed vocabulary of single-word and multi-word fillers in the
//! transcript. Single words match token-exact after lowercasing and trailing
//! punctuation strip; multi-word fillers match by sequential non-overlapping
//! substring search.

use crate::types::{FillerOccurrence, FillerWordAnalysis};
use std::collections::HashMap;

/// Single-word fillers, matched token-exact
const SINGLE_WORD_FILLERS: [&str; 13] = [
    "um", "uh", "er", "ah", "like", "basically", "actually", "literally", "honestly", "so", "well",
    "right", "okay",
];

/// Multi-word fillers, matched as substrings of the lowercased transcript
const MULTI_WORD_FILLERS: [&str; 2] = ["you know", "i mean"];

/// Detect filler words in a transcript.
///
/// Returns total count, per-filler occurrences sorted by frequency
/// descending, and the word indices of single-word hits.
pub fn detect_filler_words(transcript: &str) -> FillerWordAnalysis {
    if transcript.trim().is_empty() {
        return FillerWordAnalysis::default();
    }

    let mut counts: HashMap<&str, u32> = HashMap::new();
    let mut positions = Vec::new();

    for (index, token) in transcript.split_whitespace().enumerate() {
        let normalized = normalize_token(token);
        if let Some(filler) = SINGLE_WORD_FILLERS.iter().copied().find(|f| *f == normalized) {
            *counts.entry(filler).or_insert(0) += 1;
            positions.push(index);
        }
    }

    let lowered = transcript.to_lowercase();
    for phrase in MULTI_WORD_FILLERS {
        let hits = count_non_overlapping(&lowered, phrase);
        if hits > 0 {
            *counts.entry(phrase).or_insert(0) += hits;
        }
    }

    let count = counts.values().sum();
    let mut occurrences: Vec<FillerOccurrence> = counts
        .into_iter()
        .map(|(word, count)| FillerOccurrence {
            word: word.to_string(),
            count,
        })
        .collect();
    // Frequency descending, then alphabetical for a stable order
    occurrences.sort_by(|a, b| b.count.cmp(&a.count).then(a.word.cmp(&b.word)));

    FillerWordAnalysis {
        count,
        occurrences,
        positions,
    }
}

/// Lowercase a token and strip trailing punctuation
fn normalize_token(token: &str) -> String {
    token
        .to_lowercase()
        .trim_end_matches(['.', ',', '!', '?', ';', ':'])
        .to_string()
}

/// Count non-overlapping occurrences of `needle` in `haystack`
fn count_non_overlapping(haystack: &str, needle: &str) -> u32 {
    let mut count = 0;
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        count += 1;
        from += pos + needle.len();
    }
    count
}

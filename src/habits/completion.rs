//! Thought-completion analysis
//!
//! Detects rambling by sentence length. Sentences split on runs of terminal
//! punctuation; a sentence past 25 words is long, past 40 very long (and
//! still counted as long).

use crate::types::ThoughtCompletionAnalysis;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum transcript length (chars) for a meaningful profile
const MIN_TRANSCRIPT_CHARS: usize = 20;

/// Words beyond this make a sentence long
const LONG_SENTENCE_WORDS: usize = 25;

/// Words beyond this make a sentence very long
const VERY_LONG_SENTENCE_WORDS: usize = 40;

static SENTENCE_SPLIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]+").expect("static pattern"));

/// Analyze sentence lengths for rambling.
pub fn analyze_thought_completion(transcript: &str) -> ThoughtCompletionAnalysis {
    if transcript.len() < MIN_TRANSCRIPT_CHARS {
        return ThoughtCompletionAnalysis {
            completion_score: 50.0,
            sentence_count: 0,
            average_sentence_length: 0.0,
            long_sentences: 0,
            very_long_sentences: 0,
            feedback: "Not enough transcript to analyze thought completion.".to_string(),
        };
    }

    let lengths: Vec<usize> = SENTENCE_SPLIT
        .split(transcript)
        .map(|s| s.split_whitespace().count())
        .filter(|&n| n > 0)
        .collect();

    let long = lengths.iter().filter(|&&n| n > LONG_SENTENCE_WORDS).count() as u32;
    let very_long = lengths
        .iter()
        .filter(|&&n| n > VERY_LONG_SENTENCE_WORDS)
        .count() as u32;

    let average = if lengths.is_empty() {
        0.0
    } else {
        lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
    };

    let score = (90.0 - long as f64 * 5.0 - very_long as f64 * 10.0).clamp(0.0, 100.0);

    ThoughtCompletionAnalysis {
        completion_score: score,
        sentence_count: lengths.len() as u32,
        average_sentence_length: average,
        long_sentences: long,
        very_long_sentences: very_long,
        feedback: completion_feedback(long, very_long, average),
    }
}

/// Feedback in priority order
fn completion_feedback(long: u32, very_long: u32, average: f64) -> String {
    if very_long > 0 {
        return "Some sentences run on far too long. Break them up so each thought lands."
            .to_string();
    }
    if long > 2 {
        return "Several thoughts stretch past their point. Finish them sooner.".to_string();
    }
    if average < 5.0 {
        return "Your sentences are very short. Expand your thoughts with a detail or example."
            .to_string();
    }
    "Well-formed thoughts - your sentences finish cleanly.".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sentence(words: usize) -> String {
        let mut s = vec!["word"; words].join(" ");
        s.push('.');
        s
    }

    #[test]
    fn test_short_transcript_returns_default() {
        let result = analyze_thought_completion("Too short.");
        assert_eq!(result.completion_score, 50.0);
        assert_eq!(result.sentence_count, 0);
    }

    #[test]
    fn test_clean_sentences_score_90() {
        let transcript = format!("{} {} {}", sentence(10), sentence(12), sentence(8));
        let result = analyze_thought_completion(&transcript);
        assert_eq!(result.completion_score, 90.0);
        assert_eq!(result.sentence_count, 3);
        assert_eq!(result.long_sentences, 0);
        assert!((result.average_sentence_length - 10.0).abs() < 1e-9);
        assert!(result.feedback.contains("Well-formed"));
    }

    #[test]
    fn test_long_sentences_penalized() {
        let transcript = format!("{} {}", sentence(30), sentence(10));
        let result = analyze_thought_completion(&transcript);
        assert_eq!(result.long_sentences, 1);
        assert_eq!(result.very_long_sentences, 0);
        assert_eq!(result.completion_score, 85.0);
    }

    #[test]
    fn test_very_long_counts_in_both_tallies() {
        let transcript = format!("{} {}", sentence(45), sentence(10));
        let result = analyze_thought_completion(&transcript);
        assert_eq!(result.long_sentences, 1);
        assert_eq!(result.very_long_sentences, 1);
        // 90 - 5 - 10
        assert_eq!(result.completion_score, 75.0);
        assert!(result.feedback.contains("Break them up"));
    }

    #[test]
    fn test_many_long_sentences_feedback() {
        let transcript = format!(
            "{} {} {} {}",
            sentence(28),
            sentence(30),
            sentence(27),
            sentence(10)
        );
        let result = analyze_thought_completion(&transcript);
        assert_eq!(result.long_sentences, 3);
        assert!(result.feedback.contains("Finish them sooner"));
    }

    #[test]
    fn test_choppy_sentences_feedback() {
        let transcript = "Yes. No. We did. It works. Then we shipped it fast.";
        let result = analyze_thought_completion(transcript);
        assert!(result.average_sentence_length < 5.0);
        assert!(result.feedback.contains("Expand"));
    }

    #[test]
    fn test_multiple_terminators_one_split() {
        let transcript = "We shipped the release!!! Everyone celebrated together afterwards.";
        let result = analyze_thought_completion(transcript);
        assert_eq!(result.sentence_count, 2);
    }

    #[test]
    fn test_score_clamps_at_zero() {
        let parts: Vec<String> = (0..12).map(|_| sentence(50)).collect();
        let result = analyze_thought_completion(&parts.join(" "));
        assert_eq!(result.completion_score, 0.0);
    }
}

//! Stuttering/fluency profile
//!
//! Detects blocks, repetitions, and pace consistency, then folds them into a
//! single fluency score. Runs on the same word timings as the habit
//! analyzers but with its own threshold profile: blocks start at 0.5 s
//! (coaching pauses at 0.3 s) and pace is measured over fixed 10-second
//! wall-clock windows rather than phrase segments.

use crate::stats;
use crate::types::{
    Block, BlockSeverity, PaceAnalysis, PaceConsistency, Repetition, RepetitionKind,
    StutteringReport, StutteringSeverity, WordTiming,
};
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum gap (seconds) that counts as a block
const BLOCK_GAP_SEC: f64 = 0.5;

/// Gaps at or above this are severe blocks
const SEVERE_BLOCK_GAP_SEC: f64 = 1.0;

/// Wall-clock window length for pace bucketing (seconds)
const PACE_WINDOW_SEC: f64 = 10.0;

/// Minimum words for a pace-consistency reading
const MIN_WORDS_FOR_PACE: usize = 5;

/// Cap on generated recommendations
const MAX_RECOMMENDATIONS: usize = 4;

/// Candidate syllable stutters: hyphen-joined parts ending in a word.
/// Validation of the leading single letters happens in code - the regex
/// crate has no backreferences.
static SYLLABLE_CANDIDATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z](?:-[A-Za-z]+)+\b").expect("static stutter pattern"));

/// Generate the full stuttering profile for one recording.
pub fn generate_stuttering_report(transcript: &str, words: &[WordTiming]) -> StutteringReport {
    let blocks = detect_blocks(words);
    let block_severity = classify_block_severity(&blocks);
    let repetitions = detect_repetitions(transcript, words);
    let pace = analyze_pace_consistency(words);
    let fluency_score = compute_fluency_score(&blocks, &repetitions, &pace);
    let overall_severity = classify_overall_severity(fluency_score);
    let recommendations = build_recommendations(block_severity, &repetitions, &pace);

    StutteringReport {
        blocks,
        block_severity,
        repetitions,
        pace,
        fluency_score,
        overall_severity,
        recommendations,
    }
}

/// Detect blocks: inter-word gaps of at least 0.5 s (severe at 1.0 s).
pub fn detect_blocks(words: &[WordTiming]) -> Vec<Block> {
    let mut blocks = Vec::new();
    for i in 1..words.len() {
        let gap = words[i].start - words[i - 1].end;
        if gap >= BLOCK_GAP_SEC {
            blocks.push(Block {
                duration_sec: gap,
                at_sec: words[i - 1].end,
                after_word: i - 1,
                is_severe: gap >= SEVERE_BLOCK_GAP_SEC,
            });
        }
    }
    blocks
}

/// Overall block severity from counts
fn classify_block_severity(blocks: &[Block]) -> BlockSeverity {
    let count = blocks.len();
    let severe = blocks.iter().filter(|b| b.is_severe).count();

    if count > 5 || severe > 2 {
        BlockSeverity::High
    } else if count > 2 || severe > 0 {
        BlockSeverity::Moderate
    } else if count > 0 {
        BlockSeverity::Mild
    } else {
        BlockSeverity::None
    }
}

/// Detect repetitions two ways: runs of identical consecutive word tokens,
/// and syllable-level stutter patterns in the transcript text.
pub fn detect_repetitions(transcript: &str, words: &[WordTiming]) -> Vec<Repetition> {
    let mut repetitions = detect_word_runs(words);
    repetitions.extend(detect_syllable_stutters(transcript));
    repetitions
}

/// Greedily group runs of identical consecutive tokens (punctuation-stripped,
/// case-insensitive) of length 2 or more.
fn detect_word_runs(words: &[WordTiming]) -> Vec<Repetition> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < words.len() {
        let token = normalize_word(&words[i].word);
        let mut run_len = 1;
        while i + run_len < words.len() && normalize_word(&words[i + run_len].word) == token {
            run_len += 1;
        }
        if run_len >= 2 && !token.is_empty() {
            runs.push(Repetition {
                word: token,
                count: run_len as u32,
                timestamp_sec: Some(words[i].start),
                kind: RepetitionKind::Word,
            });
        }
        i += run_len;
    }
    runs
}

/// Match syllable stutters like "b-b-ball" across the transcript text.
///
/// A hit needs at least two identical leading single letters and a final
/// part of two or more characters. The text match carries no timing, so
/// `timestamp_sec` stays `None`.
fn detect_syllable_stutters(transcript: &str) -> Vec<Repetition> {
    SYLLABLE_CANDIDATE
        .find_iter(transcript)
        .filter_map(|m| {
            let text = m.as_str();
            let parts: Vec<&str> = text.split('-').collect();
            let leading = &parts[..parts.len() - 1];
            let last = parts[parts.len() - 1];

            let first = leading[0].to_lowercase();
            let all_same_letter = leading
                .iter()
                .all(|p| p.len() == 1 && p.to_lowercase() == first);

            if leading.len() >= 2 && all_same_letter && last.len() >= 2 {
                Some(Repetition {
                    word: text.to_string(),
                    count: parts.len() as u32,
                    timestamp_sec: None,
                    kind: RepetitionKind::Syllable,
                })
            } else {
                None
            }
        })
        .collect()
}

fn normalize_word(word: &str) -> String {
    word.to_lowercase()
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '\'')
        .collect()
}

/// Windowed pace metrics: words bucketed into fixed 10-second windows from
/// recording start, local wpm per non-empty window, cv across them.
pub fn analyze_pace_consistency(words: &[WordTiming]) -> PaceAnalysis {
    if words.len() < MIN_WORDS_FOR_PACE {
        return PaceAnalysis {
            average_wpm: 0.0,
            coefficient_of_variation: 0.0,
            consistency: PaceConsistency::Unknown,
            window_wpm: Vec::new(),
        };
    }

    let last_start = words[words.len() - 1].start;
    let window_count = (last_start / PACE_WINDOW_SEC) as usize + 1;
    let mut counts = vec![0u32; window_count];
    for w in words {
        let index = (w.start / PACE_WINDOW_SEC) as usize;
        counts[index] += 1;
    }

    // Words per 10-second window, scaled to a per-minute rate; empty windows
    // (silence between takes) are excluded from the spread
    let window_wpm: Vec<f64> = counts
        .iter()
        .filter(|&&c| c > 0)
        .map(|&c| c as f64 * 60.0 / PACE_WINDOW_SEC)
        .collect();

    let average_wpm = stats::mean(&window_wpm);
    let cv = stats::coefficient_of_variation(&window_wpm);

    let consistency = if cv > 40.0 {
        PaceConsistency::HighlyVariable
    } else if cv > 25.0 {
        PaceConsistency::SomewhatVariable
    } else {
        PaceConsistency::Consistent
    };

    PaceAnalysis {
        average_wpm,
        coefficient_of_variation: cv,
        consistency,
        window_wpm,
    }
}

/// Fluency score: 100 minus per-finding deductions.
///
/// A severe block costs a flat 10 (not 5 + 10); repetitions cost 8 each;
/// variable pace costs 15 past cv 40, else 8 past cv 25.
fn compute_fluency_score(blocks: &[Block], repetitions: &[Repetition], pace: &PaceAnalysis) -> f64 {
    let mut score = 100.0;

    for block in blocks {
        score -= if block.is_severe { 10.0 } else { 5.0 };
    }
    score -= repetitions.len() as f64 * 8.0;

    if pace.consistency != PaceConsistency::Unknown {
        if pace.coefficient_of_variation > 40.0 {
            score -= 15.0;
        } else if pace.coefficient_of_variation > 25.0 {
            score -= 8.0;
        }
    }

    score.clamp(0.0, 100.0)
}

/// Severity band for the fluency score
fn classify_overall_severity(fluency_score: f64) -> StutteringSeverity {
    if fluency_score < 50.0 {
        StutteringSeverity::Significant
    } else if fluency_score < 70.0 {
        StutteringSeverity::Moderate
    } else if fluency_score < 85.0 {
        StutteringSeverity::Mild
    } else {
        StutteringSeverity::Minimal
    }
}

/// Recommendations from the worst findings, capped at four, never empty
fn build_recommendations(
    block_severity: BlockSeverity,
    repetitions: &[Repetition],
    pace: &PaceAnalysis,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    match block_severity {
        BlockSeverity::High => recommendations.push(
            "Long silent blocks interrupt your flow often. Practice gentle onsets: ease into \
             the first sound of a word instead of forcing it."
                .to_string(),
        ),
        BlockSeverity::Moderate => recommendations.push(
            "Some silent blocks appeared. Try light articulatory contact and keep breathing \
             steady through hard words."
                .to_string(),
        ),
        _ => {}
    }

    if repetitions.len() > 2 {
        recommendations.push(
            "Repeated words and sounds came up several times. Slow the first syllable of a \
             hard word and stretch it slightly."
                .to_string(),
        );
    } else if !repetitions.is_empty() {
        recommendations.push(
            "A few repetitions slipped in. Pausing briefly before a tricky word helps it come \
             out once."
                .to_string(),
        );
    }

    match pace.consistency {
        PaceConsistency::HighlyVariable => recommendations.push(
            "Your pace swings heavily between moments. Practice reading aloud at one steady \
             rate before adding variation back."
                .to_string(),
        ),
        PaceConsistency::SomewhatVariable if pace.average_wpm > 180.0 => recommendations.push(
            "You speed up under pressure. Anchor to a comfortable rate around 150 words per \
             minute."
                .to_string(),
        ),
        _ => {}
    }

    recommendations.truncate(MAX_RECOMMENDATIONS);

    if recommendations.is_empty() {
        recommendations
            .push("Fluent delivery - no notable blocks, repetitions, or pace swings.".to_string());
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn word(text: &str, start: f64, end: f64) -> WordTiming {
        WordTiming {
            word: text.to_string(),
            start,
            end,
        }
    }

    fn timed(texts: &[&str], spacing: f64) -> Vec<WordTiming> {
        texts
            .iter()
            .enumerate()
            .map(|(i, t)| word(t, i as f64 * spacing, i as f64 * spacing + 0.2))
            .collect()
    }

    #[test]
    fn test_block_at_exactly_one_second_is_severe() {
        let words = vec![word("a", 0.0, 0.2), word("b", 1.2, 1.4)];
        let blocks = detect_blocks(&words);
        assert_eq!(blocks.len(), 1);
        assert!((blocks[0].duration_sec - 1.0).abs() < 1e-9);
        assert!(blocks[0].is_severe);
    }

    #[test]
    fn test_block_below_threshold_ignored() {
        let words = vec![word("a", 0.0, 0.2), word("b", 0.65, 0.85)];
        let blocks = detect_blocks(&words);
        assert!(blocks.is_empty());
    }

    #[test]
    fn test_non_severe_block() {
        let words = vec![word("a", 0.0, 0.2), word("b", 0.9, 1.1)];
        let blocks = detect_blocks(&words);
        assert_eq!(blocks.len(), 1);
        assert!(!blocks[0].is_severe);
    }

    #[test]
    fn test_block_severity_bands() {
        let none: Vec<Block> = Vec::new();
        assert_eq!(classify_block_severity(&none), BlockSeverity::None);

        let mild = vec![Block {
            duration_sec: 0.6,
            at_sec: 1.0,
            after_word: 0,
            is_severe: false,
        }];
        assert_eq!(classify_block_severity(&mild), BlockSeverity::Mild);

        // One severe block is moderate even with low count
        let moderate = vec![Block {
            duration_sec: 1.5,
            at_sec: 1.0,
            after_word: 0,
            is_severe: true,
        }];
        assert_eq!(classify_block_severity(&moderate), BlockSeverity::Moderate);

        // More than five blocks is high regardless of severity
        let high: Vec<Block> = (0..6)
            .map(|i| Block {
                duration_sec: 0.6,
                at_sec: i as f64,
                after_word: i,
                is_severe: false,
            })
            .collect();
        assert_eq!(classify_block_severity(&high), BlockSeverity::High);
    }

    #[test]
    fn test_consecutive_word_repetition() {
        let words = timed(&["the", "the", "the", "cat"], 0.3);
        let reps = detect_repetitions("the the the cat", &words);
        assert_eq!(reps.len(), 1);
        assert_eq!(reps[0].word, "the");
        assert_eq!(reps[0].count, 3);
        assert_eq!(reps[0].kind, RepetitionKind::Word);
        assert_eq!(reps[0].timestamp_sec, Some(0.0));
    }

    #[test]
    fn test_repetition_ignores_case_and_punctuation() {
        let words = timed(&["Well,", "well", "that's", "done"], 0.3);
        let reps = detect_repetitions("Well, well that's done", &words);
        assert_eq!(reps.len(), 1);
        assert_eq!(reps[0].word, "well");
        assert_eq!(reps[0].count, 2);
    }

    #[test]
    fn test_separate_runs_grouped_separately() {
        let words = timed(&["go", "go", "stop", "go", "go", "go"], 0.3);
        let reps = detect_word_runs(&words);
        assert_eq!(reps.len(), 2);
        assert_eq!(reps[0].count, 2);
        assert_eq!(reps[1].count, 3);
    }

    #[test]
    fn test_syllable_stutter_detected() {
        let reps = detect_syllable_stutters("I want the b-b-ball please");
        assert_eq!(reps.len(), 1);
        assert_eq!(reps[0].word, "b-b-ball");
        assert_eq!(reps[0].count, 3);
        assert_eq!(reps[0].kind, RepetitionKind::Syllable);
        assert_eq!(reps[0].timestamp_sec, None);
    }

    #[test]
    fn test_hyphenated_compound_not_a_stutter() {
        // Ordinary hyphenated words must not match
        let reps = detect_syllable_stutters("a well-known state-of-the-art system");
        assert!(reps.is_empty());
    }

    #[test]
    fn test_single_prefix_letter_not_a_stutter() {
        // "b-ball" has only one leading letter - not a repetition
        let reps = detect_syllable_stutters("he plays b-ball on weekends");
        assert!(reps.is_empty());
    }

    #[test]
    fn test_pace_unknown_below_five_words() {
        let words = timed(&["a", "b", "c", "d"], 0.3);
        let pace = analyze_pace_consistency(&words);
        assert_eq!(pace.consistency, PaceConsistency::Unknown);
        assert!(pace.window_wpm.is_empty());
    }

    #[test]
    fn test_pace_consistent_windows() {
        // 30 words spaced 1 s apart: 10 words in each of three windows
        let words: Vec<WordTiming> = (0..30)
            .map(|i| word("w", i as f64, i as f64 + 0.2))
            .collect();
        let pace = analyze_pace_consistency(&words);
        assert_eq!(pace.window_wpm.len(), 3);
        assert!((pace.average_wpm - 60.0).abs() < 1e-9);
        assert_eq!(pace.consistency, PaceConsistency::Consistent);
    }

    #[test]
    fn test_pace_empty_windows_excluded() {
        // Burst at t=0-2, silence, burst at t=30-32
        let mut words: Vec<WordTiming> = (0..8)
            .map(|i| word("w", i as f64 * 0.25, i as f64 * 0.25 + 0.2))
            .collect();
        words.extend((0..8).map(|i| word("w", 30.0 + i as f64 * 0.25, 30.2 + i as f64 * 0.25)));
        let pace = analyze_pace_consistency(&words);
        // Windows 1 and 2 are empty and excluded
        assert_eq!(pace.window_wpm.len(), 2);
        assert_eq!(pace.consistency, PaceConsistency::Consistent);
    }

    #[test]
    fn test_pace_highly_variable() {
        // 20 words in window 0, 3 words in window 1: cv way past 40
        let mut words: Vec<WordTiming> = (0..20)
            .map(|i| word("w", i as f64 * 0.45, i as f64 * 0.45 + 0.2))
            .collect();
        words.extend((0..3).map(|i| word("w", 12.0 + i as f64 * 2.0, 12.2 + i as f64 * 2.0)));
        let pace = analyze_pace_consistency(&words);
        assert_eq!(pace.consistency, PaceConsistency::HighlyVariable);
    }

    #[test]
    fn test_fluency_deductions() {
        let blocks = vec![
            Block {
                duration_sec: 0.6,
                at_sec: 1.0,
                after_word: 0,
                is_severe: false,
            },
            Block {
                duration_sec: 1.4,
                at_sec: 3.0,
                after_word: 2,
                is_severe: true,
            },
        ];
        let repetitions = vec![Repetition {
            word: "the".to_string(),
            count: 2,
            timestamp_sec: Some(0.0),
            kind: RepetitionKind::Word,
        }];
        let pace = PaceAnalysis {
            average_wpm: 150.0,
            coefficient_of_variation: 10.0,
            consistency: PaceConsistency::Consistent,
            window_wpm: vec![150.0],
        };
        // 100 - 5 - 10 - 8 = 77
        let score = compute_fluency_score(&blocks, &repetitions, &pace);
        assert_eq!(score, 77.0);
        assert_eq!(classify_overall_severity(score), StutteringSeverity::Mild);
    }

    #[test]
    fn test_fluency_clamps_at_zero() {
        let blocks: Vec<Block> = (0..15)
            .map(|i| Block {
                duration_sec: 1.2,
                at_sec: i as f64,
                after_word: i,
                is_severe: true,
            })
            .collect();
        let pace = PaceAnalysis {
            average_wpm: 100.0,
            coefficient_of_variation: 50.0,
            consistency: PaceConsistency::HighlyVariable,
            window_wpm: vec![60.0, 180.0],
        };
        let score = compute_fluency_score(&blocks, &[], &pace);
        assert_eq!(score, 0.0);
        assert_eq!(
            classify_overall_severity(score),
            StutteringSeverity::Significant
        );
    }

    #[test]
    fn test_severity_band_edges() {
        assert_eq!(
            classify_overall_severity(49.9),
            StutteringSeverity::Significant
        );
        assert_eq!(classify_overall_severity(50.0), StutteringSeverity::Moderate);
        assert_eq!(classify_overall_severity(70.0), StutteringSeverity::Mild);
        assert_eq!(classify_overall_severity(85.0), StutteringSeverity::Minimal);
    }

    #[test]
    fn test_recommendations_never_empty() {
        let pace = PaceAnalysis {
            average_wpm: 150.0,
            coefficient_of_variation: 10.0,
            consistency: PaceConsistency::Consistent,
            window_wpm: vec![150.0],
        };
        let recs = build_recommendations(BlockSeverity::None, &[], &pace);
        assert_eq!(recs.len(), 1);
        assert!(recs[0].contains("Fluent"));
    }

    #[test]
    fn test_recommendations_capped_at_four() {
        let repetitions: Vec<Repetition> = (0..5)
            .map(|i| Repetition {
                word: format!("w{}", i),
                count: 2,
                timestamp_sec: Some(i as f64),
                kind: RepetitionKind::Word,
            })
            .collect();
        let pace = PaceAnalysis {
            average_wpm: 200.0,
            coefficient_of_variation: 55.0,
            consistency: PaceConsistency::HighlyVariable,
            window_wpm: vec![60.0, 200.0],
        };
        let recs = build_recommendations(BlockSeverity::High, &repetitions, &pace);
        assert!(recs.len() <= 4);
        assert!(!recs.is_empty());
    }

    #[test]
    fn test_full_report_generation() {
        let words = vec![
            word("the", 0.0, 0.2),
            word("the", 0.3, 0.5),
            word("project", 0.6, 1.0),
            word("went", 2.2, 2.4),
            word("well", 2.5, 2.7),
            word("overall", 2.8, 3.2),
        ];
        let report = generate_stuttering_report("the the project went well overall", &words);

        // One severe block (gap 1.2 s after "project")
        assert_eq!(report.blocks.len(), 1);
        assert!(report.blocks[0].is_severe);
        assert_eq!(report.block_severity, BlockSeverity::Moderate);

        // One word repetition
        assert_eq!(report.repetitions.len(), 1);

        // 100 - 10 (severe block) - 8 (repetition) = 82
        assert_eq!(report.fluency_score, 82.0);
        assert_eq!(report.overall_severity, StutteringSeverity::Mild);
        assert!(!report.recommendations.is_empty());
    }
}

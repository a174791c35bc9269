//! Strategic-pause analysis
//!
//! Classifies inter-word gaps into coaching buckets and scores the pausing
//! habit. The stuttering profile runs its own block detection with different
//! thresholds (`stuttering::detect_blocks`); the two are kept separate on
//! purpose - one serves rhetorical coaching, the other the fluency profile.

use crate::types::{Pause, PauseAnalysis, PauseKind, WordTiming};

/// Minimum gap (seconds) recorded as a pause at all
const MIN_PAUSE_SEC: f64 = 0.3;

/// Gaps at or above this are strategic rather than short
const STRATEGIC_PAUSE_SEC: f64 = 0.8;

/// Gaps at or above this are too long
const TOO_LONG_PAUSE_SEC: f64 = 4.0;

/// Minimum words needed for a meaningful pause profile
const MIN_WORDS: usize = 5;

/// Analyze pausing behavior over the word timings.
pub fn analyze_strategic_pauses(words: &[WordTiming]) -> PauseAnalysis {
    if words.len() < MIN_WORDS {
        return PauseAnalysis {
            pause_score: 50.0,
            total_pauses: 0,
            short_pauses: 0,
            strategic_pauses: 0,
            too_long_pauses: 0,
            longest_pauses: Vec::new(),
            feedback: "Not enough data to analyze pausing.".to_string(),
        };
    }

    let pauses = record_pauses(words);

    let short = pauses.iter().filter(|p| p.kind == PauseKind::Short).count() as u32;
    let strategic = pauses
        .iter()
        .filter(|p| p.kind == PauseKind::Strategic)
        .count() as u32;
    let too_long = pauses
        .iter()
        .filter(|p| p.kind == PauseKind::TooLong)
        .count() as u32;

    let score = compute_pause_score(pauses.len(), strategic, too_long, words.len());
    let feedback = pause_feedback(pauses.len(), short, strategic, too_long);

    let mut longest = pauses.clone();
    longest.sort_by(|a, b| b.duration_sec.total_cmp(&a.duration_sec));
    longest.truncate(5);

    PauseAnalysis {
        pause_score: score,
        total_pauses: pauses.len() as u32,
        short_pauses: short,
        strategic_pauses: strategic,
        too_long_pauses: too_long,
        longest_pauses: longest,
        feedback,
    }
}

/// Record every inter-word gap of at least 0.3 s with its coaching bucket
fn record_pauses(words: &[WordTiming]) -> Vec<Pause> {
    let mut pauses = Vec::new();
    for i in 1..words.len() {
        let gap = words[i].start - words[i - 1].end;
        if let Some(kind) = classify_gap(gap) {
            pauses.push(Pause {
                duration_sec: gap,
                at_sec: words[i - 1].end,
                after_word: i - 1,
                kind,
            });
        }
    }
    pauses
}

/// Coaching bucket for one gap, or None below the recording threshold
fn classify_gap(gap: f64) -> Option<PauseKind> {
    if gap >= TOO_LONG_PAUSE_SEC {
        Some(PauseKind::TooLong)
    } else if gap >= STRATEGIC_PAUSE_SEC {
        Some(PauseKind::Strategic)
    } else if gap >= MIN_PAUSE_SEC {
        Some(PauseKind::Short)
    } else {
        None
    }
}

/// Score the pausing habit.
///
/// Base 70; +15 when strategic pauses exceed 5% of words; -5 when they exceed
/// 15% (combining with the +15 to a net +10 for the narrow slightly-choppy
/// band); -10 per too-long pause. No pauses at all overrides to 30.
fn compute_pause_score(
    total_pauses: usize,
    strategic: u32,
    too_long: u32,
    word_count: usize,
) -> f64 {
    if total_pauses == 0 {
        return 30.0;
    }

    let mut score = 70.0;
    let strategic_ratio = strategic as f64 / word_count as f64;
    if strategic_ratio > 0.05 {
        score += 15.0;
    }
    if strategic_ratio > 0.15 {
        score -= 5.0;
    }
    score -= 10.0 * too_long as f64;

    score.clamp(0.0, 100.0)
}

/// Feedback in priority order
fn pause_feedback(total_pauses: usize, short: u32, strategic: u32, too_long: u32) -> String {
    if total_pauses == 0 {
        return "You spoke without pausing. Slow down and give your audience room to absorb each point.".to_string();
    }
    if strategic == 0 {
        return "Your pauses were all brief. Hold a pause a little longer for emphasis.".to_string();
    }
    if too_long > 1 {
        return "Several pauses ran long enough to feel like awkward silences. Aim for one to two seconds.".to_string();
    }
    if short > 3 * strategic {
        return "Mostly short pauses. Let a few stretch out to mark your key points.".to_string();
    }
    "Good use of strategic pauses to emphasize your points.".to_string()
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

    #[test]
    fn test_gap_classification() {
        assert_eq!(classify_gap(0.1), None);
        assert_eq!(classify_gap(0.3), Some(PauseKind::Short));
        assert_eq!(classify_gap(0.79), Some(PauseKind::Short));
        assert_eq!(classify_gap(0.8), Some(PauseKind::Strategic));
        assert_eq!(classify_gap(1.3), Some(PauseKind::Strategic));
        assert_eq!(classify_gap(3.99), Some(PauseKind::Strategic));
        assert_eq!(classify_gap(4.0), Some(PauseKind::TooLong));
    }

    #[test]
    fn test_too_few_words_returns_default() {
        let words = vec![word("a", 0.0, 0.2), word("b", 1.5, 1.7)];
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.pause_score, 50.0);
        assert_eq!(result.feedback, "Not enough data to analyze pausing.");
    }

    #[test]
    fn test_strategic_gap_recorded() {
        // 1.3 s gap after "point" is strategic: 0.8 <= 1.3 < 4.0
        let words = vec![
            word("this", 0.0, 0.2),
            word("is", 0.25, 0.4),
            word("the", 0.45, 0.55),
            word("point", 0.6, 0.9),
            word("exactly", 2.2, 2.8),
        ];
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.strategic_pauses, 1);
        assert_eq!(result.total_pauses, 1);
        assert_eq!(result.longest_pauses[0].kind, PauseKind::Strategic);
        assert!((result.longest_pauses[0].duration_sec - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_no_pauses_scores_30() {
        let words: Vec<WordTiming> = (0..10)
            .map(|i| word("w", i as f64 * 0.3, i as f64 * 0.3 + 0.25))
            .collect();
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.total_pauses, 0);
        assert_eq!(result.pause_score, 30.0);
        assert!(result.feedback.contains("Slow down"));
    }

    #[test]
    fn test_good_strategic_ratio_bonus() {
        // 10 words, 1 strategic pause: ratio 0.1 > 0.05 -> 70 + 15 = 85
        let mut words = Vec::new();
        let mut t = 0.0;
        for i in 0..10 {
            words.push(word("w", t, t + 0.2));
            t += if i == 4 { 1.2 } else { 0.25 };
        }
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.strategic_pauses, 1);
        assert_eq!(result.pause_score, 85.0);
    }

    #[test]
    fn test_choppy_band_nets_plus_ten() {
        // 5 words, 2 strategic pauses: ratio 0.4 > 0.15 -> 70 + 15 - 5 = 80
        let words = vec![
            word("a", 0.0, 0.2),
            word("b", 1.2, 1.4),
            word("c", 2.4, 2.6),
            word("d", 2.65, 2.8),
            word("e", 2.85, 3.0),
        ];
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.strategic_pauses, 2);
        assert_eq!(result.pause_score, 80.0);
    }

    #[test]
    fn test_zero_strategic_feedback_outranks_awkward() {
        let words = vec![
            word("a", 0.0, 0.2),
            word("b", 4.5, 4.7),
            word("c", 9.5, 9.7),
            word("d", 9.75, 9.9),
            word("e", 9.95, 10.1),
        ];
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.too_long_pauses, 2);
        // 70 - 20, no strategic bonus
        assert_eq!(result.pause_score, 50.0);
        // Zero strategic pauses takes feedback priority over awkward silences
        assert!(result.feedback.contains("emphasis"));
    }

    #[test]
    fn test_too_long_pauses_penalized() {
        let words = vec![
            word("a", 0.0, 0.2),
            word("b", 1.2, 1.4),
            word("c", 5.9, 6.1),
            word("d", 10.6, 10.8),
            word("e", 10.85, 11.0),
        ];
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.strategic_pauses, 1);
        assert_eq!(result.too_long_pauses, 2);
        // 70 + 15 - 5 (ratio 0.2) - 20
        assert_eq!(result.pause_score, 60.0);
        assert!(result.feedback.contains("awkward"));
    }

    #[test]
    fn test_top_five_longest() {
        let mut words = Vec::new();
        let mut t = 0.0;
        // Seven pauses of increasing length
        for i in 0..8 {
            words.push(word("w", t, t + 0.2));
            t += 0.2 + 0.3 + i as f64 * 0.1;
        }
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.total_pauses, 7);
        assert_eq!(result.longest_pauses.len(), 5);
        // Sorted descending
        for pair in result.longest_pauses.windows(2) {
            assert!(pair[0].duration_sec >= pair[1].duration_sec);
        }
    }

    #[test]
    fn test_score_stays_in_range() {
        // Many too-long pauses would push below zero without the clamp
        let mut words = Vec::new();
        let mut t = 0.0;
        for _ in 0..12 {
            words.push(word("w", t, t + 0.2));
            t += 5.0;
        }
        let result = analyze_strategic_pauses(&words);
        assert_eq!(result.pause_score, 0.0);
    }
}

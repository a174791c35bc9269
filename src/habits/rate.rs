//! Speaking-rate variability analysis
//!
//! Measures how much the local speaking rate moves between phrases. Phrase
//! boundaries fall wherever the inter-word gap exceeds 0.4 s - a threshold
//! independent of the pause buckets; the stuttering profile measures pace a
//! third way, over fixed wall-clock windows.

use crate::stats;
use crate::types::{PhraseSegment, RateVariabilityAnalysis, VariationBand, WordTiming};

/// Gap (seconds) that ends a phrase segment
const PHRASE_GAP_SEC: f64 = 0.4;

/// Minimum words for a meaningful variability profile
const MIN_WORDS: usize = 10;

/// Minimum phrase duration (seconds) to yield a usable local rate
const MIN_PHRASE_DURATION_SEC: f64 = 0.2;

/// Local rates at or above this are discarded as timing noise
const MAX_PLAUSIBLE_WPM: f64 = 300.0;

/// Minimum valid phrase rates before falling back to a whole-transcript estimate
const MIN_PHRASE_RATES: usize = 3;

/// Segments kept for display
const MAX_SEGMENTS: usize = 20;

/// Analyze phrase-level speaking-rate variability.
pub fn analyze_rate_variability(words: &[WordTiming]) -> RateVariabilityAnalysis {
    if words.len() < MIN_WORDS {
        return neutral_default("Not enough data to analyze pace variety.");
    }

    let segments = segment_phrases(words);
    let rates: Vec<f64> = segments.iter().map(|s| s.wpm).collect();

    if rates.len() < MIN_PHRASE_RATES {
        // Too few clean phrases; estimate one rate over the whole take
        let wpm = whole_transcript_wpm(words);
        return RateVariabilityAnalysis {
            variability_score: 70.0,
            average_wpm: wpm,
            min_wpm: wpm,
            max_wpm: wpm,
            std_dev_wpm: 0.0,
            coefficient_of_variation: 0.0,
            has_good_variation: false,
            band: None,
            segments,
            feedback: "Too few distinct phrases to measure variety; overall pace estimated instead."
                .to_string(),
        };
    }

    let average = stats::mean(&rates);
    let std_dev = stats::std_dev(&rates);
    let cv = stats::coefficient_of_variation(&rates);
    let min = rates.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = rates.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

    let band = classify_band(cv);
    let has_good_variation = band == VariationBand::Varied;
    let variability_score = if has_good_variation { 95.0 } else { 60.0 };

    let mut display = segments;
    display.truncate(MAX_SEGMENTS);

    RateVariabilityAnalysis {
        variability_score,
        average_wpm: average,
        min_wpm: min,
        max_wpm: max,
        std_dev_wpm: std_dev,
        coefficient_of_variation: cv,
        has_good_variation,
        band: Some(band),
        segments: display,
        feedback: band_feedback(band),
    }
}

/// Split words into phrase segments and compute each valid local rate.
///
/// A segment is kept when it has at least 2 words, lasts at least 0.2 s, and
/// its rate stays under the plausibility cap.
fn segment_phrases(words: &[WordTiming]) -> Vec<PhraseSegment> {
    let mut segments = Vec::new();
    let mut phrase_start = 0;

    for i in 0..words.len() {
        let is_last = i + 1 == words.len();
        let breaks = !is_last && words[i + 1].start - words[i].end > PHRASE_GAP_SEC;
        if is_last || breaks {
            if let Some(segment) = build_segment(&words[phrase_start..=i]) {
                segments.push(segment);
            }
            phrase_start = i + 1;
        }
    }

    segments
}

/// Local rate for one phrase, or None when the phrase is too short or noisy
fn build_segment(phrase: &[WordTiming]) -> Option<PhraseSegment> {
    if phrase.len() < 2 {
        return None;
    }
    let start = phrase[0].start;
    let end = phrase[phrase.len() - 1].end;
    let duration = end - start;
    if duration < MIN_PHRASE_DURATION_SEC {
        return None;
    }
    let wpm = phrase.len() as f64 / duration * 60.0;
    if wpm >= MAX_PLAUSIBLE_WPM {
        return None;
    }
    Some(PhraseSegment {
        start_sec: start,
        end_sec: end,
        word_count: phrase.len() as u32,
        wpm,
    })
}

/// One rate over the entire take, for the too-few-phrases fallback
fn whole_transcript_wpm(words: &[WordTiming]) -> f64 {
    let duration = words[words.len() - 1].end - words[0].start;
    if duration <= 0.0 {
        return 0.0;
    }
    words.len() as f64 / duration * 60.0
}

/// Band for the coefficient of variation of local rates
fn classify_band(cv: f64) -> VariationBand {
    if cv < 15.0 {
        VariationBand::Monotone
    } else if cv <= 40.0 {
        VariationBand::Varied
    } else {
        VariationBand::Erratic
    }
}

fn band_feedback(band: VariationBand) -> String {
    match band {
        VariationBand::Monotone => {
            "Your pace barely changed. Vary it - speed up through detail, slow down on key points."
                .to_string()
        }
        VariationBand::Varied => {
            "Good pace variety. Your rate shifts keep the delivery engaging.".to_string()
        }
        VariationBand::Erratic => {
            "Your pace is erratic. Smooth out the swings so the variation feels deliberate."
                .to_string()
        }
    }
}

fn neutral_default(feedback: &str) -> RateVariabilityAnalysis {
    RateVariabilityAnalysis {
        variability_score: 50.0,
        average_wpm: 0.0,
        min_wpm: 0.0,
        max_wpm: 0.0,
        std_dev_wpm: 0.0,
        coefficient_of_variation: 0.0,
        has_good_variation: false,
        band: None,
        segments: Vec::new(),
        feedback: feedback.to_string(),
    }
}

//! Report aggregation
//!
//! Runs every analyzer over one [`AnalysisInput`] and composes the results
//! into a [`PerformanceReport`]. The analyzers are mutually independent and
//! share no state; sequential order here is not observable in the output.
//!
//! This function is deterministic: identical input produces identical
//! output. Provenance stamping (timestamps, instance ids) lives in
//! [`crate::encoder`].

use crate::habits::{
    analyze_rate_variability, analyze_strategic_pauses, analyze_thought_completion,
    analyze_volume_patterns, detect_analogies, detect_filler_words, detect_framework,
    detect_hedging,
};
use crate::stuttering::generate_stuttering_report;
use crate::types::{
    AnalysisInput, CognitiveHabits, DeliveryHabits, HabitResults, PerformanceReport,
    ReportSummary, SpeechMetrics, StutteringReport, VisualMetrics, VocalHabits,
};

/// Habit weights for the composite habit score (sum to 1.0)
const WEIGHT_PAUSE: f64 = 0.15;
const WEIGHT_RATE: f64 = 0.10;
const WEIGHT_DECLARATIVE: f64 = 0.15;
const WEIGHT_VOLUME: f64 = 0.15;
const WEIGHT_COMPLETION: f64 = 0.15;
const WEIGHT_FRAMEWORK: f64 = 0.15;
const WEIGHT_ANALOGY: f64 = 0.15;

/// Overall weights (sum to 1.0)
const WEIGHT_CLARITY: f64 = 0.15;
const WEIGHT_FLUENCY: f64 = 0.10;
const WEIGHT_HABITS: f64 = 0.35;
const WEIGHT_PACE: f64 = 0.10;
const WEIGHT_EYE_CONTACT: f64 = 0.15;
const WEIGHT_POSTURE: f64 = 0.15;

/// A habit below this score contributes its feedback as a recommendation
const HABIT_RECOMMENDATION_THRESHOLD: f64 = 70.0;

/// Cap on merged recommendations
const MAX_RECOMMENDATIONS: usize = 8;

/// Run the full analysis over one finished recording.
pub fn generate_performance_report(input: &AnalysisInput) -> PerformanceReport {
    // Independent analyzers over their input slices
    let fillers = detect_filler_words(&input.transcript);
    let pauses = analyze_strategic_pauses(&input.words);
    let hedging = detect_hedging(&input.transcript);
    let rate = analyze_rate_variability(&input.words);
    let volume = analyze_volume_patterns(&input.volume_history);
    let completion = analyze_thought_completion(&input.transcript);
    let framework = detect_framework(&input.transcript);
    let analogy = detect_analogies(&input.transcript);
    let stuttering = resolve_stuttering(input);

    // Transcript-level metrics
    let word_count = input.transcript.split_whitespace().count();
    let wpm = overall_wpm(word_count, input.duration_ms);
    let filler_ratio = if word_count > 0 {
        fillers.count as f64 / word_count as f64
    } else {
        0.0
    };

    // Composite scores
    let clarity_score = compute_clarity_score(wpm, filler_ratio);
    let habits_score = WEIGHT_PAUSE * pauses.pause_score
        + WEIGHT_RATE * rate.variability_score
        + WEIGHT_DECLARATIVE * hedging.declarative_score
        + WEIGHT_VOLUME * volume.volume_score
        + WEIGHT_COMPLETION * completion.completion_score
        + WEIGHT_FRAMEWORK * framework.framework_score
        + WEIGHT_ANALOGY * analogy.analogy_score;

    let fluency_score = stuttering
        .as_ref()
        .map(|r| r.fluency_score)
        .unwrap_or(100.0);

    let overall_score = (WEIGHT_CLARITY * clarity_score
        + WEIGHT_FLUENCY * fluency_score
        + WEIGHT_HABITS * habits_score
        + WEIGHT_PACE * (wpm / 1.5).min(100.0)
        + WEIGHT_EYE_CONTACT * input.eye_contact_percentage
        + WEIGHT_POSTURE * input.posture_score)
        .clamp(0.0, 100.0);

    // Merged recommendations: weak habits first, then the fluency profile,
    // then transcript-level basics; truncated, never deduplicated
    let mut recommendations = Vec::new();
    let habit_feedback = [
        (pauses.pause_score, &pauses.feedback),
        (rate.variability_score, &rate.feedback),
        (hedging.declarative_score, &hedging.feedback),
        (volume.volume_score, &volume.feedback),
        (completion.completion_score, &completion.feedback),
        (framework.framework_score, &framework.feedback),
        (analogy.analogy_score, &analogy.feedback),
    ];
    for (score, feedback) in habit_feedback {
        if score < HABIT_RECOMMENDATION_THRESHOLD {
            recommendations.push(feedback.clone());
        }
    }
    if let Some(report) = &stuttering {
        recommendations.extend(report.recommendations.iter().cloned());
    }
    recommendations.extend(base_recommendations(
        wpm,
        filler_ratio,
        input.eye_contact_percentage,
        input.posture_score,
        word_count,
    ));
    recommendations.truncate(MAX_RECOMMENDATIONS);

    PerformanceReport {
        summary: ReportSummary {
            overall_score,
            clarity_score,
            habits_score,
            fluency_score,
        },
        speech: SpeechMetrics {
            words_per_minute: wpm,
            word_count: word_count as u32,
            fillers,
        },
        habits: HabitResults {
            delivery: DeliveryHabits { pauses, rate },
            vocal: VocalHabits { volume },
            cognitive: CognitiveHabits {
                hedging,
                completion,
                framework,
                analogy,
            },
        },
        visual: VisualMetrics {
            eye_contact_percentage: input.eye_contact_percentage,
            posture_score: input.posture_score,
        },
        stuttering,
        transcript: input.transcript.clone(),
        recommendations,
    }
}

/// Prefer the collaborator's precomputed profile; otherwise generate one
/// from the word timings when any exist.
fn resolve_stuttering(input: &AnalysisInput) -> Option<StutteringReport> {
    if input.stuttering_report.is_some() {
        return input.stuttering_report.clone();
    }
    if input.words.is_empty() {
        return None;
    }
    Some(generate_stuttering_report(&input.transcript, &input.words))
}

/// Overall speaking rate from transcript word count and recording duration
fn overall_wpm(word_count: usize, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 0.0;
    }
    word_count as f64 / (duration_ms as f64 / 60_000.0)
}

/// Clarity from pace and filler density.
///
/// `100 - 0.3*max(0, 100-wpm) - 0.5*max(0, wpm-180) - filler_ratio*500`,
/// clamped to 0-100: slow delivery costs a little, racing costs more,
/// filler density costs the most.
fn compute_clarity_score(wpm: f64, filler_ratio: f64) -> f64 {
    let slow_penalty = 0.3 * (100.0 - wpm).max(0.0);
    let fast_penalty = 0.5 * (wpm - 180.0).max(0.0);
    let filler_penalty = filler_ratio * 500.0;
    (100.0 - slow_penalty - fast_penalty - filler_penalty).clamp(0.0, 100.0)
}

/// Transcript-level recommendation items
fn base_recommendations(
    wpm: f64,
    filler_ratio: f64,
    eye_contact: f64,
    posture: f64,
    word_count: usize,
) -> Vec<String> {
    let mut items = Vec::new();

    if word_count > 0 {
        if wpm > 180.0 {
            items.push(
                "You're averaging over 180 words per minute. Slow down so key points land."
                    .to_string(),
            );
        } else if wpm > 0.0 && wpm < 100.0 {
            items.push(
                "Your overall pace is under 100 words per minute. Pick up the energy a little."
                    .to_string(),
            );
        }
        if filler_ratio > 0.05 {
            items.push(
                "Filler words make up over 5% of your speech. Swap them for a silent pause."
                    .to_string(),
            );
        }
    }
    if eye_contact < 50.0 {
        items.push("Look at the camera more - aim for eye contact over half the time.".to_string());
    }
    if posture < 60.0 {
        items.push("Square your shoulders to the camera and sit tall.".to_string());
    }

    items
}

//! Context -> Core -> Connect structure detection
//!
//! Checks the transcript for marker phrases of each part of the CCC answer
//! framework by case-insensitive substring containment.

use crate::types::FrameworkAnalysis;

/// Markers that open with background framing
const CONTEXT_MARKERS: [&str; 7] = [
    "let me give you some context",
    "to give you context",
    "the situation was",
    "this started when",
    "at the time",
    "for background",
    "to set the stage",
];

/// Markers that signal the central point
const CORE_MARKERS: [&str; 7] = [
    "the main point",
    "the key thing",
    "the core of",
    "what i did was",
    "most importantly",
    "the heart of",
    "my main",
];

/// Markers that tie the answer back to the audience
const CONNECT_MARKERS: [&str; 7] = [
    "this connects to",
    "this relates to",
    "the takeaway",
    "what this means",
    "going forward",
    "this matters because",
    "which is why",
];

/// Detect Context -> Core -> Connect structure in the transcript.
pub fn detect_framework(transcript: &str) -> FrameworkAnalysis {
    let lowered = transcript.to_lowercase();

    let has_context = contains_any(&lowered, &CONTEXT_MARKERS);
    let has_core = contains_any(&lowered, &CORE_MARKERS);
    let has_connect = contains_any(&lowered, &CONNECT_MARKERS);

    let parts_found = [has_context, has_core, has_connect]
        .iter()
        .filter(|&&b| b)
        .count() as u32;

    FrameworkAnalysis {
        framework_score: parts_found as f64 / 3.0 * 100.0,
        has_context,
        has_core,
        has_connect,
        feedback: framework_feedback(parts_found, has_context, has_core),
    }
}

fn contains_any(lowered: &str, markers: &[&str]) -> bool {
    markers.iter().any(|m| lowered.contains(m))
}

/// Feedback by parts found; two parts names the single missing one
fn framework_feedback(parts_found: u32, has_context: bool, has_core: bool) -> String {
    match parts_found {
        3 => "Full Context-Core-Connect structure. Your answer is easy to follow.".to_string(),
        2 => {
            let missing = if !has_context {
                "Context"
            } else if !has_core {
                "Core"
            } else {
                "Connect"
            };
            format!(
                "Two of three structure parts present. Add the {} part to complete the arc.",
                missing
            )
        }
        1 => "Some structure is there. Shape the answer as Context, then Core, then Connect."
            .to_string(),
        _ => "Try the Context-Core-Connect framework: open with the situation, land your \
              central point, then tie it back to why it matters for your audience."
            .to_string(),
    }
}

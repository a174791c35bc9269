//! Core types for the Orate analysis engine
//!
//! This module defines the data structures that flow through the engine:
//! recording inputs, per-analyzer results, and the aggregate performance
//! report.

use serde::{Deserialize, Serialize};

/// A single transcribed word with its timing, in seconds from recording start.
///
/// Word sequences are expected to be chronological (`start[i] >= end[i-1]`)
/// with `start <= end` for each word. This is a precondition on the
/// transcription collaborator, not a runtime guard; see `session::parse_session`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordTiming {
    /// The word as transcribed (may carry punctuation)
    pub word: String,
    /// Start of the word (seconds)
    pub start: f64,
    /// End of the word (seconds)
    pub end: f64,
}

/// One loudness sample from the recording collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeSample {
    /// Seconds from recording start
    pub timestamp: f64,
    /// Loudness level (0-100)
    pub level: f64,
}

/// Complete input for one finished recording.
///
/// Visual scores (`eye_contact_percentage`, `posture_score`) and the optional
/// precomputed stuttering report are produced by external collaborators and
/// treated as opaque here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisInput {
    /// Full transcript text (UTF-8)
    pub transcript: String,
    /// Word-level timestamps, chronological
    #[serde(default)]
    pub words: Vec<WordTiming>,
    /// Volume trace sampled at roughly fixed intervals
    #[serde(default)]
    pub volume_history: Vec<VolumeSample>,
    /// Recording duration in milliseconds
    pub duration_ms: u64,
    /// Eye contact percentage from the face tracker (0-100)
    #[serde(default)]
    pub eye_contact_percentage: f64,
    /// Posture score from the pose tracker (0-100)
    #[serde(default)]
    pub posture_score: f64,
    /// Stuttering profile precomputed by a separate pass, merged in when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stuttering_report: Option<StutteringReport>,
}

// ============================================================================
// Filler words
// ============================================================================

/// Count for one distinct filler word or phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillerOccurrence {
    /// The filler as matched (lowercased)
    pub word: String,
    /// Number of occurrences
    pub count: u32,
}

/// Result of filler-word detection over the transcript
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FillerWordAnalysis {
    /// Total filler hits (single-word and multi-word)
    pub count: u32,
    /// Per-filler counts, most frequent first
    pub occurrences: Vec<FillerOccurrence>,
    /// Word indices of single-word hits, in transcript order
    pub positions: Vec<usize>,
}

// ============================================================================
// Pauses (coaching profile)
// ============================================================================

/// Coaching bucket for a recorded pause.
///
/// These thresholds serve the pacing habit; the stuttering profile uses its
/// own block thresholds (see [`Block`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PauseKind {
    /// 0.3-0.8 s
    Short,
    /// 0.8-4.0 s, associated with rhetorical emphasis
    Strategic,
    /// 4.0 s or longer
    TooLong,
}

/// A recorded inter-word pause (gap of at least 0.3 s)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pause {
    /// Gap duration in seconds
    pub duration_sec: f64,
    /// Recording time at which the pause began (seconds)
    pub at_sec: f64,
    /// Index of the word the pause follows
    pub after_word: usize,
    /// Coaching bucket
    pub kind: PauseKind,
}

/// Result of strategic-pause analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PauseAnalysis {
    /// Pausing habit score (0-100)
    pub pause_score: f64,
    /// Total pauses recorded (gap >= 0.3 s)
    pub total_pauses: u32,
    /// Pauses in the short bucket
    pub short_pauses: u32,
    /// Pauses in the strategic bucket
    pub strategic_pauses: u32,
    /// Pauses in the too-long bucket
    pub too_long_pauses: u32,
    /// Up to five longest pauses, by duration descending
    pub longest_pauses: Vec<Pause>,
    /// Coaching feedback
    pub feedback: String,
}

// ============================================================================
// Hedging
// ============================================================================

/// Count for one hedging phrase
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgeOccurrence {
    /// The hedging phrase (lowercased)
    pub phrase: String,
    /// Number of occurrences
    pub count: u32,
}

/// Result of hedging detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HedgingAnalysis {
    /// Declarative-confidence score (0-100)
    pub declarative_score: f64,
    /// Total hedging hits across all phrases
    pub hedging_count: u32,
    /// Per-phrase counts, most frequent first
    pub occurrences: Vec<HedgeOccurrence>,
    /// Coaching feedback
    pub feedback: String,
}

// ============================================================================
// Speaking-rate variability (coaching profile)
// ============================================================================

/// A maximal run of words with no internal gap exceeding 0.4 s,
/// used for local speaking-rate measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhraseSegment {
    /// Segment start (seconds)
    pub start_sec: f64,
    /// Segment end (seconds)
    pub end_sec: f64,
    /// Words in the segment
    pub word_count: u32,
    /// Local speaking rate (words per minute)
    pub wpm: f64,
}

/// Named band for the coefficient of variation of local speaking rates.
///
/// Monotone and Erratic collapse to the same score; only the feedback text
/// distinguishes them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VariationBand {
    /// cv below 15 - delivery is too even
    Monotone,
    /// cv within 15-40 - healthy variation
    Varied,
    /// cv above 40 - pace is erratic
    Erratic,
}

/// Result of phrase-level rate-variability analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateVariabilityAnalysis {
    /// Pace-variety habit score (0-100)
    pub variability_score: f64,
    /// Mean of valid local rates (wpm); whole-transcript estimate on fallback
    pub average_wpm: f64,
    /// Slowest valid local rate (wpm)
    pub min_wpm: f64,
    /// Fastest valid local rate (wpm)
    pub max_wpm: f64,
    /// Population standard deviation of local rates
    pub std_dev_wpm: f64,
    /// Coefficient of variation of local rates (percent)
    pub coefficient_of_variation: f64,
    /// Whether the variation falls in the healthy band
    pub has_good_variation: bool,
    /// Variation band when enough phrase rates were measured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<VariationBand>,
    /// Up to 20 phrase segments for display
    pub segments: Vec<PhraseSegment>,
    /// Coaching feedback
    pub feedback: String,
}

// ============================================================================
// Volume
// ============================================================================

/// Result of loudness analysis over the volume trace
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeAnalysis {
    /// Volume habit score (0-100)
    pub volume_score: f64,
    /// Mean loudness level (0-100)
    pub average_volume: f64,
    /// Coefficient of variation of levels (percent; 0 when the mean is 0)
    pub volume_variation: f64,
    /// Whether loudness trails off toward the end of the recording
    pub has_trailing_off: bool,
    /// Raw level history for charting
    pub levels: Vec<f64>,
    /// Coaching feedback
    pub feedback: String,
}

// ============================================================================
// Thought completion
// ============================================================================

/// Result of sentence-length / rambling analysis
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThoughtCompletionAnalysis {
    /// Thought-completion habit score (0-100)
    pub completion_score: f64,
    /// Sentences found (split on terminal punctuation)
    pub sentence_count: u32,
    /// Mean words per sentence
    pub average_sentence_length: f64,
    /// Sentences longer than 25 words
    pub long_sentences: u32,
    /// Sentences longer than 40 words (also counted in `long_sentences`)
    pub very_long_sentences: u32,
    /// Coaching feedback
    pub feedback: String,
}

// ============================================================================
// Context -> Core -> Connect framework
// ============================================================================

/// Result of answer-structure detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameworkAnalysis {
    /// Framework habit score (0-100): parts found / 3
    pub framework_score: f64,
    /// Context markers present
    pub has_context: bool,
    /// Core markers present
    pub has_core: bool,
    /// Connect markers present
    pub has_connect: bool,
    /// Coaching feedback
    pub feedback: String,
}

// ============================================================================
// Analogies
// ============================================================================

/// Result of comparative/metaphorical-language detection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalogyAnalysis {
    /// Analogy habit score (0-100)
    pub analogy_score: f64,
    /// Total analogy-marker hits
    pub analogy_count: u32,
    /// Coaching feedback
    pub feedback: String,
}

// ============================================================================
// Stuttering profile
// ============================================================================

/// A speech block: an inter-word gap of at least 0.5 s.
///
/// A distinct concept from the coaching [`Pause`]; thresholds here follow the
/// fluency profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Gap duration in seconds
    pub duration_sec: f64,
    /// Recording time at which the block began (seconds)
    pub at_sec: f64,
    /// Index of the word the block follows
    pub after_word: usize,
    /// Whether the gap reached 1.0 s
    pub is_severe: bool,
}

/// Overall block severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockSeverity {
    None,
    Mild,
    Moderate,
    High,
}

/// How a repetition was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepetitionKind {
    /// Run of identical consecutive word tokens
    Word,
    /// Syllable-level stutter pattern matched in the transcript text
    Syllable,
}

/// A detected repetition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repetition {
    /// The repeated word, or the matched stutter text for syllable hits
    pub word: String,
    /// Number of repetitions in the run
    pub count: u32,
    /// Recording time of the first occurrence (seconds).
    /// `None` for syllable-level hits: the text match carries no timing.
    pub timestamp_sec: Option<f64>,
    /// Detection path
    pub kind: RepetitionKind,
}

/// Pace-consistency label over fixed 10-second windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaceConsistency {
    /// Fewer than 5 words - not enough data
    Unknown,
    /// cv of window rates at most 25
    Consistent,
    /// cv above 25
    SomewhatVariable,
    /// cv above 40
    HighlyVariable,
}

/// Windowed pace metrics for the stuttering profile.
///
/// Independent of the phrase-based rate analysis: words are bucketed into
/// fixed 10-second wall-clock windows from recording start.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaceAnalysis {
    /// Mean rate over non-empty windows (wpm)
    pub average_wpm: f64,
    /// Coefficient of variation over non-empty windows (percent)
    pub coefficient_of_variation: f64,
    /// Consistency label
    pub consistency: PaceConsistency,
    /// Local rate per non-empty window (wpm), in window order
    pub window_wpm: Vec<f64>,
}

/// Overall fluency severity derived from the fluency score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StutteringSeverity {
    Minimal,
    Mild,
    Moderate,
    Significant,
}

/// Complete stuttering/fluency profile for one recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StutteringReport {
    /// Detected blocks, in recording order
    pub blocks: Vec<Block>,
    /// Overall block severity
    pub block_severity: BlockSeverity,
    /// Detected repetitions (word runs first, then syllable hits)
    pub repetitions: Vec<Repetition>,
    /// Windowed pace metrics
    pub pace: PaceAnalysis,
    /// Fluency score (0-100; higher is more fluent)
    pub fluency_score: f64,
    /// Severity band for the fluency score
    pub overall_severity: StutteringSeverity,
    /// Up to four recommendations, never empty
    pub recommendations: Vec<String>,
}

// ============================================================================
// Performance report
// ============================================================================

/// Headline scores for the recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Weighted overall score (0-100)
    pub overall_score: f64,
    /// Clarity score from pace and filler density (0-100)
    pub clarity_score: f64,
    /// Weighted habit score (0-100)
    pub habits_score: f64,
    /// Fluency score from the stuttering profile (100 when absent)
    pub fluency_score: f64,
}

/// Transcript-level speech metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpeechMetrics {
    /// Overall speaking rate (words per minute)
    pub words_per_minute: f64,
    /// Words in the transcript
    pub word_count: u32,
    /// Filler-word profile
    pub fillers: FillerWordAnalysis,
}

/// Delivery habits: pausing and pace variety
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryHabits {
    pub pauses: PauseAnalysis,
    pub rate: RateVariabilityAnalysis,
}

/// Vocal habits: loudness
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VocalHabits {
    pub volume: VolumeAnalysis,
}

/// Cognitive habits: confidence, completion, structure, imagery
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CognitiveHabits {
    pub hedging: HedgingAnalysis,
    pub completion: ThoughtCompletionAnalysis,
    pub framework: FrameworkAnalysis,
    pub analogy: AnalogyAnalysis,
}

/// All seven habit results, grouped for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitResults {
    pub delivery: DeliveryHabits,
    pub vocal: VocalHabits,
    pub cognitive: CognitiveHabits,
}

/// Externally-computed visual scores, echoed for display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VisualMetrics {
    /// Eye contact percentage (0-100)
    pub eye_contact_percentage: f64,
    /// Posture score (0-100)
    pub posture_score: f64,
}

/// Aggregate root: everything the coaching UI needs for one recording.
///
/// Recomputed from scratch on every analysis call; never mutated or stored
/// by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    pub summary: ReportSummary,
    pub speech: SpeechMetrics,
    pub habits: HabitResults,
    pub visual: VisualMetrics,
    /// Stuttering profile; absent when no timing data was available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stuttering: Option<StutteringReport>,
    /// Transcript echoed for display
    pub transcript: String,
    /// Merged recommendations, at most eight
    pub recommendations: Vec<String>,
}

// ============================================================================
// Export envelope
// ============================================================================

/// Producer metadata stamped on exported reports
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportProducer {
    pub name: String,
    pub version: String,
    pub instance_id: String,
}

/// Export envelope for telemetry or storage by a collaborator.
///
/// Only the envelope carries wall-clock time and the encoder instance id;
/// the wrapped report itself is a pure function of the input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportEnvelope {
    pub producer: ReportProducer,
    /// RFC3339 timestamp of encoding
    pub generated_at_utc: String,
    pub report: PerformanceReport,
}

//! Orate - Speech performance analysis engine for spoken-delivery coaching
//!
//! Orate turns a finished practice recording's raw signals - transcript,
//! word-level timestamps, a volume trace, and externally-computed visual
//! scores - into habit scores, a stuttering/fluency profile, and ranked
//! recommendations, composed into one immutable performance report.
//!
//! ## Modules
//!
//! - **Habit analyzers**: pause, pace-variety, hedging, volume, thought
//!   completion, framework structure, analogy, and filler-word analysis
//! - **Stuttering profile**: blocks, repetitions, windowed pace consistency
//! - **Report aggregation**: weighted composite scores and merged
//!   recommendations

pub mod encoder;
pub mod error;
pub mod habits;
pub mod report;
pub mod session;
pub mod stats;
pub mod stuttering;
pub mod types;

// FFI bindings for C interop (always available for cdylib/staticlib builds)
pub mod ffi;

pub use encoder::ReportEncoder;
pub use error::AnalysisError;
pub use report::generate_performance_report;
pub use session::parse_session;
pub use stuttering::generate_stuttering_report;
pub use types::{AnalysisInput, PerformanceReport, StutteringReport};

/// Engine version embedded in exported report envelopes
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Producer name for exported report envelopes
pub const PRODUCER_NAME: &str = "orate";

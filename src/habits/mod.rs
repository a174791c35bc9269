//! Habit analyzers
//!
//! One module per coaching habit. Each analyzer is a pure free function over
//! its slice of the analysis input, returning a self-contained result with a
//! 0-100 score and feedback. Insufficient input never fails; it degrades to
//! a neutral default.

pub mod analogy;
pub mod completion;
pub mod filler;
pub mod framework;
pub mod hedging;
pub mod pauses;
pub mod rate;
pub mod volume;

pub use analogy::detect_analogies;
pub use completion::analyze_thought_completion;
pub use filler::detect_filler_words;
pub use framework::detect_framework;
pub use hedging::detect_hedging;
pub use pauses::analyze_strategic_pauses;
pub use rate::analyze_rate_variability;
pub use volume::analyze_volume_patterns;

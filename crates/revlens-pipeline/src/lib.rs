//! Review analysis pipeline orchestration.
//!
//! Runs extraction, and when it yields nothing (network failure, blocked
//! request, markup drift) substitutes a fixed demonstration dataset so
//! downstream consumers never receive an empty result set. The live/
//! fallback distinction is informational, not an error signal.

pub mod fallback;
pub mod run;
pub mod types;

pub use fallback::demo_reviews;
pub use run::run;
pub use types::{AnalysisOutcome, DataOrigin, SentimentSummary};

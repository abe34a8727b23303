use serde::Serialize;

use revlens_core::{ReviewRecord, Sentiment};

/// Whether a pipeline run returned scraped or substituted data.
///
/// Two terminal states per run; `Live` degrades to `Fallback` exactly when
/// extraction yields zero records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataOrigin {
    Live,
    Fallback,
}

/// Result of one pipeline run. `records` is never empty.
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub records: Vec<ReviewRecord>,
    pub origin: DataOrigin,
}

/// Per-label record counts for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentimentSummary {
    pub total: usize,
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl AnalysisOutcome {
    /// Counts records by sentiment label.
    #[must_use]
    pub fn summary(&self) -> SentimentSummary {
        let count = |label: Sentiment| {
            self.records
                .iter()
                .filter(|r| r.sentiment == label)
                .count()
        };
        SentimentSummary {
            total: self.records.len(),
            positive: count(Sentiment::Positive),
            negative: count(Sentiment::Negative),
            neutral: count(Sentiment::Neutral),
        }
    }
}

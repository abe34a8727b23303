use serde::{Deserialize, Serialize};

/// Three-way sentiment label derived from a polarity score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Scores within `[-POLARITY_DEAD_ZONE, POLARITY_DEAD_ZONE]` are neutral.
const POLARITY_DEAD_ZONE: f32 = 0.1;

impl Sentiment {
    /// Bucket a polarity score into a label.
    ///
    /// Scores strictly above `0.1` are `Positive`, strictly below `-0.1` are
    /// `Negative`, everything else (the boundaries included) is `Neutral`.
    #[must_use]
    pub fn from_score(score: f32) -> Self {
        if score > POLARITY_DEAD_ZONE {
            Sentiment::Positive
        } else if score < -POLARITY_DEAD_ZONE {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Positive => write!(f, "Positive"),
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
        }
    }
}

/// One customer review flowing through the pipeline.
///
/// `sentiment` is always derived from `review_text`; it is never accepted
/// as input from the page. Records missing body text are dropped at the
/// extraction boundary, so `review_text` is non-empty for scraped records.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub reviewer: String,
    /// Free-form rating string, `"N/A"` when the page omits it.
    pub rating: String,
    pub review_text: String,
    pub sentiment: Sentiment,
}

//! Fixed demonstration dataset substituted when extraction yields nothing.

use revlens_core::{ReviewRecord, Sentiment};

/// How many times the canonical set is replicated.
const FALLBACK_REPLICATION: usize = 10;

/// Canonical demo reviews: reviewer, rating, text, sentiment.
///
/// Sentiments are asserted constants, not recomputed at substitution time.
/// They must match what the classifier says about the same text; the test
/// below pins that agreement.
const CANONICAL_REVIEWS: &[(&str, &str, &str, Sentiment)] = &[
    (
        "Aditya",
        "5",
        "Best purchase of the year. Battery is amazing!",
        Sentiment::Positive,
    ),
    (
        "Rahul",
        "1",
        "Waste of money. Heating issues.",
        Sentiment::Negative,
    ),
    (
        "Sneha",
        "4",
        "Good value, but camera is average.",
        Sentiment::Positive,
    ),
    (
        "Vikram",
        "3",
        "It is okay. Delivery was late.",
        Sentiment::Neutral,
    ),
    ("Priya", "5", "Loving it so far!", Sentiment::Positive),
];

/// Builds the demo dataset: the canonical set replicated in order.
#[must_use]
pub fn demo_reviews() -> Vec<ReviewRecord> {
    let mut records = Vec::with_capacity(CANONICAL_REVIEWS.len() * FALLBACK_REPLICATION);
    for _ in 0..FALLBACK_REPLICATION {
        for &(reviewer, rating, text, sentiment) in CANONICAL_REVIEWS {
            records.push(ReviewRecord {
                reviewer: reviewer.to_string(),
                rating: rating.to_string(),
                review_text: text.to_string(),
                sentiment,
            });
        }
    }
    records
}

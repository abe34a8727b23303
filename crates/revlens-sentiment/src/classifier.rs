//! Three-way bucketing of polarity scores.

use revlens_core::Sentiment;

use crate::scorer::lexicon_score;

/// Classify a text span into exactly one sentiment label.
///
/// Total function: any input, including the empty string, yields a label.
/// Scores in the `[-0.1, 0.1]` dead-zone (boundaries included) are
/// `Neutral`; see [`Sentiment::from_score`].
#[must_use]
pub fn classify(text: &str) -> Sentiment {
    Sentiment::from_score(lexicon_score(text))
}

//! Lexicon-based sentiment classification for product reviews.
//!
//! Scores free text with a weighted word lexicon and buckets the polarity
//! into the three-way [`Sentiment`] label. Pure and deterministic: no I/O,
//! no hidden state, the same text always yields the same label.

pub mod classifier;
pub mod scorer;

pub use classifier::classify;
pub use revlens_core::Sentiment;
pub use scorer::lexicon_score;

//! Review extraction from product-page HTML.
//!
//! Fetches a page with a single bounded GET and parses review containers
//! out of semi-structured markup. Tolerant of structural drift: two known
//! markup revisions are tried in order, per-field absence degrades the
//! record rather than failing, and every transport or parse failure
//! collapses to an empty record set at the public boundary.

pub mod client;
pub mod error;
pub mod parse;

pub use client::PageFetcher;
pub use error::ExtractError;
pub use parse::parse_reviews;

use thiserror::Error;

/// Internal failure causes for a page fetch.
///
/// These never cross the extractor's public boundary: [`crate::PageFetcher::extract`]
/// logs them and returns an empty record set. Kept typed so tests and logs
/// can distinguish transport failures from structural mismatches.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },
}

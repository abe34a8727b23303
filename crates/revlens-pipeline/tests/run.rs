//! End-to-end tests for the pipeline orchestrator.
//!
//! Uses `wiremock` for live-page scenarios and an unroutable URL for the
//! unreachable case. The contract under test: `run` never returns an
//! empty set and never errors.

use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use revlens_core::Sentiment;
use revlens_extractor::PageFetcher;
use revlens_pipeline::{run, DataOrigin};

fn test_fetcher() -> PageFetcher {
    PageFetcher::new(5, "revlens-test/0.1").expect("failed to build test PageFetcher")
}

const REVIEW_PAGE: &str = r#"
<html><body>
  <div class="col _2wzgFH">
    <div class="_3LWZlK">5</div>
    <div class="t-ZTKy">Excellent sound, great fit.</div>
  </div>
  <div class="col _2wzgFH">
    <div class="_3LWZlK">2</div>
    <div class="t-ZTKy">Strap broke within a week.</div>
  </div>
</body></html>
"#;

#[tokio::test]
async fn run_on_unreachable_url_substitutes_demo_dataset() {
    let fetcher = test_fetcher();
    let outcome = run(&fetcher, "https://unreachable.invalid/x").await;

    assert_eq!(outcome.origin, DataOrigin::Fallback);
    assert_eq!(outcome.records.len(), 50);

    let summary = outcome.summary();
    assert_eq!(summary.positive, 30);
    assert_eq!(summary.negative, 10);
    assert_eq!(summary.neutral, 10);
}

#[tokio::test]
async fn run_on_fallback_returns_fixed_texts() {
    let fetcher = test_fetcher();
    let outcome = run(&fetcher, "https://unreachable.invalid/x").await;

    assert_eq!(
        outcome.records[0].review_text,
        "Best purchase of the year. Battery is amazing!"
    );
    assert_eq!(outcome.records[0].sentiment, Sentiment::Positive);
    assert_eq!(outcome.records[1].sentiment, Sentiment::Negative);
    assert_eq!(outcome.records[3].sentiment, Sentiment::Neutral);
}

#[tokio::test]
async fn run_on_live_page_returns_live_records() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(REVIEW_PAGE))
        .mount(&server)
        .await;

    let fetcher = test_fetcher();
    let outcome = run(&fetcher, &server.uri()).await;

    assert_eq!(outcome.origin, DataOrigin::Live);
    assert_eq!(outcome.records.len(), 2);
    assert_eq!(outcome.records[0].sentiment, Sentiment::Positive);
    assert_eq!(outcome.records[1].sentiment, Sentiment::Negative);
}

#[tokio::test]
async fn run_on_page_without_review_markup_substitutes_demo_dataset() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<html><body>No reviews here</body></html>"),
        )
        .mount(&server)
        .await;

    let fetcher = test_fetcher();
    let outcome = run(&fetcher, &server.uri()).await;

    assert_eq!(outcome.origin, DataOrigin::Fallback);
    assert_eq!(outcome.records.len(), 50);
}

//! Tiered HTML parsing for review containers.
//!
//! The source site's markup is not under our control and has shipped two
//! class-name revisions so far. Containers are located by trying each
//! revision's selector in order; the first tier with any matches wins.

use scraper::{ElementRef, Html, Selector};

use revlens_core::ReviewRecord;
use revlens_sentiment::classify;

/// Ordered container selector tiers: one entry per known markup revision
/// of the source site. A new revision means a new entry here.
const CONTAINER_TIERS: &[&str] = &["div.col._2wzgFH", "div._27M-vq"];

const TEXT_SELECTOR: &str = "div.t-ZTKy";
const RATING_SELECTOR: &str = "div._3LWZlK";

/// Truncation control the source markup appends to long review bodies.
const READ_MORE_MARKER: &str = "READ MORE";

const RATING_PLACEHOLDER: &str = "N/A";

/// The page does not expose reviewer identities at this extraction depth.
const REVIEWER_PLACEHOLDER: &str = "Verified Buyer";

/// Parses review records out of a page body, in document order.
///
/// Containers lacking a text sub-element contribute nothing. A body with
/// no matching containers (or that is not HTML at all) yields an empty vec.
#[must_use]
pub fn parse_reviews(html: &str) -> Vec<ReviewRecord> {
    let doc = Html::parse_document(html);
    let text_sel = Selector::parse(TEXT_SELECTOR).expect("valid review text selector");
    let rating_sel = Selector::parse(RATING_SELECTOR).expect("valid rating selector");

    select_containers(&doc)
        .into_iter()
        .filter_map(|container| record_from_container(container, &text_sel, &rating_sel))
        .collect()
}

/// Returns the containers matched by the first tier with any matches.
fn select_containers(doc: &Html) -> Vec<ElementRef<'_>> {
    for tier in CONTAINER_TIERS {
        let sel = Selector::parse(tier).expect("valid container selector");
        let matches: Vec<ElementRef<'_>> = doc.select(&sel).collect();
        if !matches.is_empty() {
            return matches;
        }
    }
    Vec::new()
}

/// Builds a record from one container, or `None` if it has no text
/// sub-element (not a review). A missing rating degrades to `"N/A"`.
fn record_from_container(
    container: ElementRef<'_>,
    text_sel: &Selector,
    rating_sel: &Selector,
) -> Option<ReviewRecord> {
    let text_el = container.select(text_sel).next()?;
    let review_text = clean_review_text(&text_el.text().collect::<String>());
    if review_text.is_empty() {
        return None;
    }

    let rating = container.select(rating_sel).next().map_or_else(
        || RATING_PLACEHOLDER.to_string(),
        |el| el.text().collect::<String>().trim().to_string(),
    );

    let sentiment = classify(&review_text);

    Some(ReviewRecord {
        reviewer: REVIEWER_PLACEHOLDER.to_string(),
        rating,
        review_text,
        sentiment,
    })
}

/// Strips the truncation marker and collapses whitespace.
fn clean_review_text(raw: &str) -> String {
    raw.replace(READ_MORE_MARKER, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;

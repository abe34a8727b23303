use axum::{
    extract::{Query, State},
    Extension, Json,
};
use serde::{Deserialize, Serialize};

use revlens_core::ReviewRecord;
use revlens_pipeline::{DataOrigin, SentimentSummary};

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct AnalyzeQuery {
    pub url: Option<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct AnalyzeData {
    pub origin: DataOrigin,
    pub summary: SentimentSummary,
    pub records: Vec<ReviewRecord>,
}

/// Runs the pipeline for the given product URL.
///
/// The pipeline itself has no failure state; the only error surfaced here
/// is a missing/blank `url` query param.
pub(super) async fn analyze(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Query(query): Query<AnalyzeQuery>,
) -> Result<Json<ApiResponse<AnalyzeData>>, ApiError> {
    let Some(url) = query.url.filter(|u| !u.trim().is_empty()) else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            "missing required query param: url",
        ));
    };

    let outcome = revlens_pipeline::run(&state.fetcher, &url).await;
    let summary = outcome.summary();

    Ok(Json(ApiResponse {
        data: AnalyzeData {
            origin: outcome.origin,
            summary,
            records: outcome.records,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

#[cfg(test)]
#[path = "reviews_test.rs"]
mod tests;

//! Analysis history - Model (API functions)

use crate::shared::api_error::{read_response, ApiEndpoint, ApiError};
use crate::shared::api_utils::api_url;
use contracts::domain::a001_contract_analysis::aggregate::{AnalysisDetail, AnalysisListItem};
use gloo_net::http::Request;

/// Stored analyses, newest first
pub async fn fetch_list() -> Result<Vec<AnalysisListItem>, ApiError> {
    let response = Request::get(&api_url("/analyses")).send().await?;
    // An empty history comes back as `null`
    let items: Option<Vec<AnalysisListItem>> = read_response(ApiEndpoint::History, response).await?;
    let mut items = items.unwrap_or_default();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(items)
}

/// One stored analysis. `abort` cancels the request when the session moves on.
pub async fn fetch_detail(
    id: u64,
    abort: Option<web_sys::AbortSignal>,
) -> Result<AnalysisDetail, ApiError> {
    let response = Request::get(&api_url(&format!("/analyses/{}", id)))
        .abort_signal(abort.as_ref())
        .send()
        .await?;

    read_response(ApiEndpoint::History, response).await
}

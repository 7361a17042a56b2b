//! Contract analysis - Model (API functions)

use crate::shared::api_error::{read_response, ApiEndpoint, ApiError};
use crate::shared::api_utils::api_url;
use contracts::domain::a001_contract_analysis::aggregate::AnalysisResult;
use gloo_net::http::Request;

/// Upload a contract for analysis (`POST /analyze`, multipart field `file`)
///
/// Single non-idempotent request, never retried here. `abort` cancels the
/// request at the transport level when the user re-uploads or removes the file.
pub async fn analyze(
    file: web_sys::File,
    abort: Option<web_sys::AbortSignal>,
) -> Result<AnalysisResult, ApiError> {
    let form = web_sys::FormData::new().map_err(|e| {
        log::error!("FormData unavailable: {:?}", e);
        ApiError::UploadFailed
    })?;
    form.append_with_blob("file", &file).map_err(|e| {
        log::error!("could not attach {}: {:?}", file.name(), e);
        ApiError::UploadFailed
    })?;

    // The browser sets the multipart boundary itself
    let response = Request::post(&api_url("/analyze"))
        .abort_signal(abort.as_ref())
        .body(form)?
        .send()
        .await?;

    read_response(ApiEndpoint::Analyze, response).await
}

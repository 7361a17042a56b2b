//! Error taxonomy of the analysis service calls
//!
//! Every failure is terminal for the operation that caused it and maps to a
//! short user-facing message (the `Display` impl).

use contracts::shared::error_body::ErrorBody;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error. Please check your internet connection and try again.")]
    Network,
    #[error("Unsupported file format. Please use PDF, DOC or DOCX.")]
    UnsupportedFormat,
    #[error("File is too large. Please choose a smaller file.")]
    PayloadTooLarge,
    #[error("The AI quota is exhausted. Please try again later or ask the administrator to raise the quota.")]
    QuotaExceeded,
    #[error("AI analysis failed. Please try again later.")]
    AnalysisFailed,
    #[error("Could not read the file contents. Please check the file format.")]
    ExtractionFailed,
    #[error("File upload failed. Please try again.")]
    UploadFailed,
    #[error("Server error: {0}")]
    Server(String),
    #[error("Unexpected response from the server: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_quota(&self) -> bool {
        matches!(self, ApiError::QuotaExceeded)
    }
}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::SerdeError(e) => ApiError::Decode(e.to_string()),
            other => {
                log::warn!("transport failure: {}", other);
                ApiError::Network
            }
        }
    }
}

/// Which call failed; format and size statuses only mean something for uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiEndpoint {
    Analyze,
    Chat,
    History,
}

/// Map a non-2xx response to an [`ApiError`]
pub fn classify_failure(endpoint: ApiEndpoint, status: u16, body: &str) -> ApiError {
    let message = ErrorBody::message_from(body).unwrap_or_else(|| format!("HTTP {}", status));

    if status == 429 || (status >= 500 && mentions_quota(&message)) {
        return ApiError::QuotaExceeded;
    }

    if endpoint == ApiEndpoint::Analyze {
        match status {
            400 | 415 => return ApiError::UnsupportedFormat,
            413 => return ApiError::PayloadTooLarge,
            _ => {}
        }
    }

    if status >= 500 {
        if message.contains("AI analysis failed") {
            return ApiError::AnalysisFailed;
        }
        if message.contains("Could not extract text") {
            return ApiError::ExtractionFailed;
        }
        if message.contains("File upload failed") {
            return ApiError::UploadFailed;
        }
    }

    ApiError::Server(message)
}

fn mentions_quota(message: &str) -> bool {
    message.contains("quota") || message.contains("429") || message.contains("exceeded")
}

/// Turn a service response into a typed body or a classified error
pub async fn read_response<T>(
    endpoint: ApiEndpoint,
    response: gloo_net::http::Response,
) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let status = response.status();
    let text = response.text().await?;

    if !(200..300).contains(&status) {
        let err = classify_failure(endpoint, status, &text);
        log::error!("{:?} request failed with HTTP {}: {}", endpoint, status, text);
        return Err(err);
    }

    serde_json::from_str::<T>(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

//! Build-time configuration of the web client
//!
//! The bundle is static, so settings are baked in at compile time from
//! `DOCUMIND_API_URL`, `DOCUMIND_CHAT_API_URL` and `DOCUMIND_MAX_UPLOAD_MB`.

use contracts::domain::a001_contract_analysis::upload::{
    UploadPolicy, BYTES_PER_MB, DEFAULT_MAX_UPLOAD_MB,
};

pub const DEFAULT_API_BASE: &str = "http://localhost:8080/api/v1";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the analysis service, without trailing slash
    pub api_base: String,
    /// Full URL of the chat endpoint when it lives elsewhere
    pub chat_api_url: Option<String>,
    pub max_upload_mb: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_values(None, None, None)
    }
}

impl AppConfig {
    /// Resolve configuration from raw values; blank or invalid values fall
    /// back to the defaults
    pub fn from_values(
        api_base: Option<&str>,
        chat_api_url: Option<&str>,
        max_upload_mb: Option<&str>,
    ) -> Self {
        let api_base = non_blank(api_base)
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let chat_api_url = non_blank(chat_api_url).map(str::to_string);
        let max_upload_mb = max_upload_mb
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|mb| *mb > 0 && mb.checked_mul(BYTES_PER_MB).is_some())
            .unwrap_or(DEFAULT_MAX_UPLOAD_MB);

        Self {
            api_base,
            chat_api_url,
            max_upload_mb,
        }
    }

    /// Configuration compiled into this build
    pub fn load() -> Self {
        Self::from_values(
            option_env!("DOCUMIND_API_URL"),
            option_env!("DOCUMIND_CHAT_API_URL"),
            option_env!("DOCUMIND_MAX_UPLOAD_MB"),
        )
    }

    pub fn upload_policy(&self) -> UploadPolicy {
        UploadPolicy::with_limit_mb(self.max_upload_mb)
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

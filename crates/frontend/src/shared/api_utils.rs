//! API utilities for communication with the analysis service
//!
//! Provides helper functions for constructing endpoint URLs.

use super::config::AppConfig;

/// Get the base URL for API requests, e.g. "http://localhost:8080/api/v1"
pub fn api_base() -> String {
    AppConfig::load().api_base
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/analyses/7");
/// ```
pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

/// URL of the contract chat endpoint, honouring the chat override
pub fn chat_url() -> String {
    let config = AppConfig::load();
    config
        .chat_api_url
        .unwrap_or_else(|| join_url(&config.api_base, "/contract-chat"))
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

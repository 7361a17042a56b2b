use serde::{Deserialize, Serialize};

/// Error payload returned by the analysis service on non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

impl ErrorBody {
    /// Extract a message from a raw error response body.
    ///
    /// Uses the `error` field when the body is the service's JSON envelope,
    /// otherwise the trimmed body text. Returns `None` for an empty body, an
    /// empty object or a blank `error` field.
    pub fn message_from(body: &str) -> Option<String> {
        let trimmed = body.trim();
        if trimmed.is_empty() || trimmed == "{}" {
            return None;
        }
        match serde_json::from_str::<ErrorBody>(trimmed) {
            Ok(ErrorBody { error: Some(error) }) if error.trim().is_empty() => None,
            Ok(ErrorBody { error: Some(error) }) => Some(error),
            Ok(ErrorBody { error: None }) | Err(_) => Some(trimmed.to_string()),
        }
    }
}

use crate::shared::serde_utils::nullable_list;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of one contract analysis (`POST /analyze`)
///
/// Immutable once received. `document_hash` is the service's content hash
/// (`file_hash` on the wire) and identifies the document in follow-up chat
/// questions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisResult {
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable_list")]
    pub key_clauses: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub potential_risks: Vec<String>,
    #[serde(rename = "file_hash", default)]
    pub document_hash: String,
}

impl AnalysisResult {
    pub fn has_key_clauses(&self) -> bool {
        !self.key_clauses.is_empty()
    }

    pub fn has_potential_risks(&self) -> bool {
        !self.potential_risks.is_empty()
    }

    /// First 12 characters of the hash, for display
    pub fn short_hash(&self) -> &str {
        short_hash(&self.document_hash)
    }
}

/// DTO for one row of `GET /analyses`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisListItem {
    pub id: u64,
    pub file_hash: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub summary_preview: String,
}

impl AnalysisListItem {
    pub fn label(&self) -> String {
        format!("Saved analysis #{}", self.id)
    }
}

/// DTO for `GET /analyses/{id}`
///
/// The detail record does not carry the content hash; it is joined from the
/// list item the user opened.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AnalysisDetail {
    pub id: u64,
    pub analysis_id: u64,
    #[serde(default)]
    pub summary: String,
    #[serde(default, deserialize_with = "nullable_list")]
    pub key_clauses: Vec<String>,
    #[serde(default, deserialize_with = "nullable_list")]
    pub potential_risks: Vec<String>,
}

impl AnalysisDetail {
    pub fn into_result(self, file_hash: impl Into<String>) -> AnalysisResult {
        AnalysisResult {
            summary: self.summary,
            key_clauses: self.key_clauses,
            potential_risks: self.potential_risks,
            document_hash: file_hash.into(),
        }
    }
}

pub fn short_hash(hash: &str) -> &str {
    match hash.char_indices().nth(12) {
        Some((idx, _)) => &hash[..idx],
        None => hash,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_result_from_service_json() {
        let json = r#"{
            "file_hash": "abc123",
            "summary": "Lease agreement",
            "key_clauses": ["Term: 12 months", "Rent: 1000"],
            "potential_risks": ["Early termination penalty"]
        }"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.document_hash, "abc123");
        assert_eq!(result.key_clauses.len(), 2);
        assert_eq!(result.potential_risks, vec!["Early termination penalty"]);
    }

    #[test]
    fn test_null_and_missing_lists_are_empty() {
        let json = r#"{"file_hash":"h","summary":"s","key_clauses":null}"#;
        let result: AnalysisResult = serde_json::from_str(json).unwrap();
        assert!(!result.has_key_clauses());
        assert!(!result.has_potential_risks());
    }

    #[test]
    fn test_detail_joins_hash_from_list_item() {
        let list: Vec<AnalysisListItem> = serde_json::from_str(
            r#"[{"id":7,"file_hash":"deadbeef","created_at":"2024-03-15T14:02:26Z","summary_preview":"Supply contract"}]"#,
        )
        .unwrap();
        let detail: AnalysisDetail = serde_json::from_str(
            r#"{"id":3,"analysis_id":7,"summary":"Supply contract","key_clauses":["Delivery in 30 days"],"potential_risks":null}"#,
        )
        .unwrap();

        let item = &list[0];
        assert_eq!(item.label(), "Saved analysis #7");
        let result = detail.into_result(item.file_hash.clone());
        assert_eq!(result.document_hash, "deadbeef");
        assert_eq!(result.key_clauses, vec!["Delivery in 30 days"]);
        assert!(result.potential_risks.is_empty());
    }

    #[test]
    fn test_short_hash() {
        assert_eq!(short_hash("0123456789abcdef"), "0123456789ab");
        assert_eq!(short_hash("abc"), "abc");
    }
}

//! Contract analysis - session state
//!
//! Reducer-style state for the upload → analyze → show cycle:
//! `Idle → Uploading → {Ready, Failed}`, re-upload from `Ready`/`Failed`
//! goes back through `Uploading`, and `remove` returns to `Idle` from
//! anywhere.
//!
//! Every request is issued with an [`AnalysisTicket`] carrying the session
//! generation. Starting a new request or removing the file bumps the
//! generation, so a response that arrives late is discarded by
//! [`AnalysisSession::resolve`] instead of overwriting newer state.

use crate::shared::api_error::ApiError;
use contracts::domain::a001_contract_analysis::aggregate::AnalysisResult;
use contracts::domain::a001_contract_analysis::upload::UploadCandidate;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisPhase {
    Idle,
    Uploading,
    Ready,
    Failed,
}

/// What the current result was produced from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    Upload(UploadCandidate),
    Saved { id: u64, label: String },
}

impl DocumentSource {
    pub fn label(&self) -> String {
        match self {
            DocumentSource::Upload(candidate) => candidate.name.clone(),
            DocumentSource::Saved { label, .. } => label.clone(),
        }
    }

    pub fn size_label(&self) -> Option<String> {
        match self {
            DocumentSource::Upload(candidate) => Some(candidate.size_label()),
            DocumentSource::Saved { .. } => None,
        }
    }
}

/// Identity of the current result: the content hash plus the session
/// generation it was committed in, so analysing the same file twice yields
/// two distinct documents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveDocument {
    pub revision: u64,
    pub hash: String,
}

impl ActiveDocument {
    pub fn new(revision: u64, hash: impl Into<String>) -> Self {
        Self {
            revision,
            hash: hash.into(),
        }
    }
}

/// Handle for one in-flight analysis request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalysisTicket {
    generation: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisSession {
    generation: u64,
    phase: AnalysisPhase,
    document: Option<DocumentSource>,
    result: Option<AnalysisResult>,
    error: Option<ApiError>,
}

impl Default for AnalysisSession {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisSession {
    pub fn new() -> Self {
        Self {
            generation: 0,
            phase: AnalysisPhase::Idle,
            document: None,
            result: None,
            error: None,
        }
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == AnalysisPhase::Uploading
    }

    pub fn document(&self) -> Option<&DocumentSource> {
        self.document.as_ref()
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    /// Hash of the current result; `None` whenever no result is current
    pub fn document_hash(&self) -> Option<&str> {
        self.result.as_ref().map(|r| r.document_hash.as_str())
    }

    pub fn active_document(&self) -> Option<ActiveDocument> {
        self.result
            .as_ref()
            .map(|r| ActiveDocument::new(self.generation, r.document_hash.clone()))
    }

    /// Start analysing a validated upload.
    ///
    /// Discards the previous result and error immediately. Returns `None`
    /// while another request is in flight.
    pub fn select_file(&mut self, candidate: UploadCandidate) -> Option<AnalysisTicket> {
        self.begin(DocumentSource::Upload(candidate))
    }

    /// Start loading a stored analysis, same transitions as an upload
    pub fn open_saved(&mut self, id: u64, label: impl Into<String>) -> Option<AnalysisTicket> {
        self.begin(DocumentSource::Saved {
            id,
            label: label.into(),
        })
    }

    fn begin(&mut self, document: DocumentSource) -> Option<AnalysisTicket> {
        if self.is_loading() {
            return None;
        }
        self.generation += 1;
        self.phase = AnalysisPhase::Uploading;
        self.document = Some(document);
        self.result = None;
        self.error = None;
        Some(AnalysisTicket {
            generation: self.generation,
        })
    }

    /// Commit the outcome of a request. Returns `false` when the ticket is
    /// stale and the outcome was dropped.
    pub fn resolve(
        &mut self,
        ticket: AnalysisTicket,
        outcome: Result<AnalysisResult, ApiError>,
    ) -> bool {
        if ticket.generation != self.generation || self.phase != AnalysisPhase::Uploading {
            return false;
        }
        match outcome {
            Ok(result) => {
                self.phase = AnalysisPhase::Ready;
                self.result = Some(result);
            }
            Err(err) => {
                // The document stays so the user sees what failed
                self.phase = AnalysisPhase::Failed;
                self.error = Some(err);
            }
        }
        true
    }

    /// Forget the file, result and error; any in-flight response goes stale
    pub fn remove(&mut self) {
        self.generation += 1;
        self.phase = AnalysisPhase::Idle;
        self.document = None;
        self.result = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a002_contract_chat::ui::transcript::ChatTranscript;
    use contracts::domain::a001_contract_analysis::upload::MIME_PDF;

    fn candidate(name: &str) -> UploadCandidate {
        UploadCandidate::new(name, MIME_PDF, 50 * 1024)
    }

    fn result(hash: &str, summary: &str) -> AnalysisResult {
        AnalysisResult {
            summary: summary.to_string(),
            key_clauses: vec!["Payment within 30 days".to_string()],
            potential_risks: vec![],
            document_hash: hash.to_string(),
        }
    }

    #[test]
    fn test_upload_success() {
        let mut session = AnalysisSession::new();
        assert_eq!(session.phase(), AnalysisPhase::Idle);

        let ticket = session.select_file(candidate("contract.pdf")).unwrap();
        assert!(session.is_loading());
        assert_eq!(session.document().unwrap().label(), "contract.pdf");

        assert!(session.resolve(ticket, Ok(result("abc", "Lease"))));
        assert_eq!(session.phase(), AnalysisPhase::Ready);
        assert_eq!(session.document_hash(), Some("abc"));
        assert!(session.error().is_none());
    }

    #[test]
    fn test_failure_keeps_document() {
        let mut session = AnalysisSession::new();
        let ticket = session.select_file(candidate("broken.pdf")).unwrap();

        assert!(session.resolve(ticket, Err(ApiError::ExtractionFailed)));
        assert_eq!(session.phase(), AnalysisPhase::Failed);
        assert_eq!(session.error(), Some(&ApiError::ExtractionFailed));
        assert_eq!(session.document().unwrap().label(), "broken.pdf");
        assert!(session.result().is_none());
    }

    #[test]
    fn test_single_request_in_flight() {
        let mut session = AnalysisSession::new();
        let _first = session.select_file(candidate("a.pdf")).unwrap();
        assert!(session.select_file(candidate("b.pdf")).is_none());
        assert_eq!(session.document().unwrap().label(), "a.pdf");
    }

    #[test]
    fn test_reupload_clears_result_and_chat_before_response() {
        let mut session = AnalysisSession::new();
        let mut chat = ChatTranscript::new();

        let first = session.select_file(candidate("v1.pdf")).unwrap();
        session.resolve(first, Ok(result("abc", "First")));
        chat.sync_document(session.active_document().as_ref());
        let ticket = chat.begin_send("What is the term?").unwrap();
        chat.resolve(ticket, Ok("12 months".to_string()));
        assert_eq!(chat.messages().len(), 2);

        // Re-upload; the mocked request has not answered yet
        let second = session.select_file(candidate("v2.pdf")).unwrap();
        chat.sync_document(session.active_document().as_ref());
        assert!(session.result().is_none());
        assert_eq!(session.phase(), AnalysisPhase::Uploading);
        assert!(chat.messages().is_empty());

        assert!(session.resolve(second, Ok(result("def", "Second"))));
        assert_eq!(session.result().unwrap().summary, "Second");
    }

    #[test]
    fn test_remove_makes_pending_response_stale() {
        let mut session = AnalysisSession::new();
        let ticket = session.select_file(candidate("a.pdf")).unwrap();
        session.remove();

        assert!(!session.resolve(ticket, Ok(result("abc", "late"))));
        assert_eq!(session.phase(), AnalysisPhase::Idle);
        assert!(session.result().is_none());
        assert!(session.document().is_none());
    }

    #[test]
    fn test_late_response_after_new_upload_is_dropped() {
        let mut session = AnalysisSession::new();
        let stale = session.select_file(candidate("a.pdf")).unwrap();
        session.remove();
        let fresh = session.select_file(candidate("b.pdf")).unwrap();

        assert!(!session.resolve(stale, Err(ApiError::Network)));
        assert!(session.is_loading());
        assert!(session.resolve(fresh, Ok(result("b", "B"))));
        assert_eq!(session.document_hash(), Some("b"));
    }

    #[test]
    fn test_same_file_twice_yields_independent_results() {
        let mut session = AnalysisSession::new();

        let first = session.select_file(candidate("contract.pdf")).unwrap();
        session.resolve(first, Ok(result("abc", "Run 1")));
        let first_result = session.result().cloned().unwrap();
        let first_revision = session.active_document().unwrap().revision;

        let second = session.select_file(candidate("contract.pdf")).unwrap();
        assert!(session.result().is_none());
        session.resolve(second, Ok(result("abc", "Run 2")));

        assert_eq!(first_result.summary, "Run 1");
        assert_ne!(session.active_document().unwrap().revision, first_revision);
        assert_eq!(session.result().unwrap().summary, "Run 2");
        // A ticket is good for one resolution only
        assert!(!session.resolve(second, Ok(result("abc", "Run 3"))));
        assert_eq!(session.result().unwrap().summary, "Run 2");
    }

    #[test]
    fn test_retry_after_failure() {
        let mut session = AnalysisSession::new();
        let ticket = session.select_file(candidate("a.pdf")).unwrap();
        session.resolve(ticket, Err(ApiError::QuotaExceeded));

        let retry = session.select_file(candidate("a.pdf")).unwrap();
        assert!(session.error().is_none());
        assert!(session.resolve(retry, Ok(result("abc", "ok"))));
        assert_eq!(session.phase(), AnalysisPhase::Ready);
    }

    #[test]
    fn test_open_saved_analysis() {
        let mut session = AnalysisSession::new();
        let ticket = session.open_saved(7, "Saved analysis #7").unwrap();
        assert_eq!(session.document().unwrap().label(), "Saved analysis #7");
        assert_eq!(session.document().unwrap().size_label(), None);

        session.resolve(ticket, Ok(result("deadbeef", "Saved")));
        assert_eq!(session.document_hash(), Some("deadbeef"));
    }

    #[test]
    fn test_open_saved_refused_while_uploading() {
        let mut session = AnalysisSession::new();
        let _upload = session.select_file(candidate("a.pdf")).unwrap();

        assert!(session.open_saved(7, "Saved analysis #7").is_none());
        assert_eq!(session.document().unwrap().label(), "a.pdf");
        assert!(session.is_loading());
    }
}

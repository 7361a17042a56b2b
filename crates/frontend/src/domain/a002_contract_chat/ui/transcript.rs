//! Contract chat - transcript state
//!
//! The transcript always belongs to exactly one active document. When the
//! active document changes the transcript is cleared, and responses to
//! questions asked about the previous document are dropped on arrival.

use crate::domain::a001_contract_analysis::ui::details::state::ActiveDocument;
use crate::shared::api_error::ApiError;
use contracts::domain::a002_contract_chat::aggregate::{
    normalize_question, ChatMessage, QuestionRejection,
};
use thiserror::Error;

pub const EMPTY_ANSWER_FALLBACK: &str = "No answer was received from the AI.";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    #[error(transparent)]
    Question(#[from] QuestionRejection),
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error("Analyze a contract before asking questions.")]
    NoDocument,
    #[error("Please wait for the current answer.")]
    Busy,
}

impl ChatError {
    pub fn is_quota(&self) -> bool {
        matches!(self, ChatError::Api(err) if err.is_quota())
    }
}

/// Handle for one in-flight question
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatTicket {
    generation: u64,
    document: ActiveDocument,
    question: String,
}

impl ChatTicket {
    pub fn document_hash(&self) -> &str {
        &self.document.hash
    }

    pub fn question(&self) -> &str {
        &self.question
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatTranscript {
    generation: u64,
    document: Option<ActiveDocument>,
    messages: Vec<ChatMessage>,
    draft: String,
    error: Option<ChatError>,
    error_seq: u64,
    is_sending: bool,
}

impl ChatTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document_hash(&self) -> Option<&str> {
        self.document.as_ref().map(|d| d.hash.as_str())
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Question being typed, not yet sent
    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    pub fn error(&self) -> Option<&ChatError> {
        self.error.as_ref()
    }

    /// Sequence number of the current error, for timed dismissal
    pub fn error_seq(&self) -> u64 {
        self.error_seq
    }

    pub fn is_sending(&self) -> bool {
        self.is_sending
    }

    pub fn can_send(&self) -> bool {
        self.document.is_some() && !self.is_sending
    }

    /// The send button is enabled
    pub fn can_submit(&self) -> bool {
        self.can_send() && !self.draft.trim().is_empty()
    }

    /// Follow the active document. Returns `true` when it changed and the
    /// transcript was reset.
    pub fn sync_document(&mut self, document: Option<&ActiveDocument>) -> bool {
        if self.document.as_ref() == document {
            return false;
        }
        self.reset();
        self.document = document.cloned();
        true
    }

    /// Clear messages, draft, error and the sending flag; in-flight answers
    /// go stale
    pub fn reset(&mut self) {
        self.generation += 1;
        self.messages.clear();
        self.draft.clear();
        self.error = None;
        self.is_sending = false;
    }

    /// Append the user's question and hand out a ticket for the request.
    ///
    /// Empty questions are refused without an error message.
    pub fn begin_send(&mut self, raw: &str) -> Result<ChatTicket, ChatError> {
        let rejection = match self.check_send(raw) {
            Ok(ticket) => {
                self.messages.push(ChatMessage::user(ticket.question.clone()));
                self.is_sending = true;
                self.error = None;
                return Ok(ticket);
            }
            Err(rejection) => rejection,
        };
        if rejection != ChatError::Question(QuestionRejection::Empty) {
            self.set_error(rejection.clone());
        }
        Err(rejection)
    }

    /// Send the current draft; it is cleared once the question is accepted
    pub fn send_draft(&mut self) -> Result<ChatTicket, ChatError> {
        let raw = std::mem::take(&mut self.draft);
        let result = self.begin_send(&raw);
        if result.is_err() {
            self.draft = raw;
        }
        result
    }

    fn check_send(&self, raw: &str) -> Result<ChatTicket, ChatError> {
        let document = self.document.clone().ok_or(ChatError::NoDocument)?;
        if self.is_sending {
            return Err(ChatError::Busy);
        }
        let question = normalize_question(raw)?;
        Ok(ChatTicket {
            generation: self.generation,
            document,
            question,
        })
    }

    /// Commit an answer or failure. Returns `false` when the ticket belongs
    /// to a previous document or transcript and the outcome was dropped.
    pub fn resolve(&mut self, ticket: ChatTicket, outcome: Result<String, ApiError>) -> bool {
        if ticket.generation != self.generation || self.document.as_ref() != Some(&ticket.document)
        {
            return false;
        }
        self.is_sending = false;
        match outcome {
            Ok(answer) if answer.trim().is_empty() => {
                self.messages.push(ChatMessage::assistant(EMPTY_ANSWER_FALLBACK));
            }
            Ok(answer) => self.messages.push(ChatMessage::assistant(answer)),
            Err(err) => self.set_error(ChatError::Api(err)),
        }
        true
    }

    fn set_error(&mut self, err: ChatError) {
        self.error_seq += 1;
        self.error = Some(err);
    }

    /// Dismiss the error if it is still the one identified by `seq`
    pub fn dismiss_error(&mut self, seq: u64) {
        if self.error_seq == seq {
            self.error = None;
        }
    }
}

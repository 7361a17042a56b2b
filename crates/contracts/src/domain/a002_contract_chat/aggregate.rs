use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Longest question the chat endpoint accepts, in characters
pub const MAX_QUESTION_CHARS: usize = 300;

/// Role of a message in the contract chat
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

/// One entry of the chat transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatMessage {
    pub id: Uuid,
    pub role: ChatRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn new(role: ChatRole, content: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            content,
            created_at: Utc::now(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content.into())
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Body of `POST /contract-chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractChatRequest {
    pub file_hash: String,
    pub contract_text: String,
    pub question: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContractChatResponse {
    #[serde(default)]
    pub answer: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuestionRejection {
    #[error("Question is empty.")]
    Empty,
    #[error("Question must be at most {max} characters.")]
    TooLong { max: usize },
}

/// Trim a question and check it against the endpoint's length limit
pub fn normalize_question(raw: &str) -> Result<String, QuestionRejection> {
    let question = raw.trim();
    if question.is_empty() {
        return Err(QuestionRejection::Empty);
    }
    if question.chars().count() > MAX_QUESTION_CHARS {
        return Err(QuestionRejection::TooLong {
            max: MAX_QUESTION_CHARS,
        });
    }
    Ok(question.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_wire_format() {
        let request = ContractChatRequest {
            file_hash: "abc".into(),
            contract_text: "Summary".into(),
            question: "Who pays for delivery?".into(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["file_hash"], "abc");
        assert_eq!(json["contract_text"], "Summary");
        assert_eq!(json["question"], "Who pays for delivery?");
    }

    #[test]
    fn test_response_without_answer_is_empty() {
        let response: ContractChatResponse = serde_json::from_str("{}").unwrap();
        assert!(response.answer.is_empty());
    }

    #[test]
    fn test_normalize_question() {
        assert_eq!(normalize_question("  hi \n"), Ok("hi".to_string()));
        assert_eq!(normalize_question("   "), Err(QuestionRejection::Empty));

        // Counted in characters, not bytes
        let at_limit = "ă".repeat(MAX_QUESTION_CHARS);
        assert!(normalize_question(&at_limit).is_ok());
        let over = "a".repeat(MAX_QUESTION_CHARS + 1);
        assert_eq!(
            normalize_question(&over),
            Err(QuestionRejection::TooLong { max: 300 })
        );
    }

    #[test]
    fn test_message_constructors() {
        let question = ChatMessage::user("What is the term?");
        let answer = ChatMessage::assistant("Twelve months.");
        assert!(question.is_user());
        assert!(!answer.is_user());
        assert_ne!(question.id, answer.id);
        assert_eq!(ChatRole::Assistant.as_str(), "assistant");
    }
}

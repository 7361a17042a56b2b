//! Contract Chat - Model (API functions)

use crate::shared::api_error::{read_response, ApiEndpoint, ApiError};
use crate::shared::api_utils::chat_url;
use contracts::domain::a002_contract_chat::aggregate::{ContractChatRequest, ContractChatResponse};
use gloo_net::http::Request;

/// Ask a question about an analysed contract
///
/// `contract_text` is the stored summary, sent as context next to the hash.
pub async fn ask(
    document_hash: &str,
    contract_text: &str,
    question: &str,
) -> Result<String, ApiError> {
    let request = ContractChatRequest {
        file_hash: document_hash.to_string(),
        contract_text: contract_text.to_string(),
        question: question.to_string(),
    };

    let response = Request::post(&chat_url()).json(&request)?.send().await?;

    let body: ContractChatResponse = read_response(ApiEndpoint::Chat, response).await?;
    Ok(body.answer)
}

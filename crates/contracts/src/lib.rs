//! Types shared between the Documind web client and the analysis service:
//! request/response DTOs, the chat message model and the upload policy.

pub mod domain;
pub mod shared;

//! Contract Chat UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API function for `POST /contract-chat`
//! - transcript.rs: ChatTranscript state bound to the active document
//! - view_model.rs: ContractChatVm with RwSignals
//! - view.rs: Main component ContractChat

mod model;
pub mod transcript;
mod view;
mod view_model;

pub use view::ContractChat;
pub use view_model::ContractChatVm;

pub mod a001_contract_analysis;
pub mod a002_contract_chat;

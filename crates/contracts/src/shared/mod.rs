pub mod error_body;
pub mod serde_utils;

pub mod api_error;
pub mod api_utils;
pub mod config;
pub mod error_message;
pub mod icons;
pub mod modal;

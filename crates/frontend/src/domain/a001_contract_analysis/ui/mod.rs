pub mod details;
pub mod results;
pub mod upload;

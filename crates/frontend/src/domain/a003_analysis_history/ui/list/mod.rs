//! Analysis history list (MVVM Standard)
//!
//! Structure:
//! - model.rs: API functions for `GET /analyses` and `GET /analyses/{id}`
//! - view.rs: AnalysisHistoryPage, opening an entry loads it into the
//!   shared analysis session

pub mod model;
mod view;

pub use view::AnalysisHistoryPage;

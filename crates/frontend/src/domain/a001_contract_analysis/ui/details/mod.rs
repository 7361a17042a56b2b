//! Contract Analysis UI Module (MVVM Standard)
//!
//! Structure:
//! - model.rs: API function for `POST /analyze`
//! - state.rs: AnalysisSession state machine
//! - view_model.rs: ContractAnalysisVm with RwSignals
//! - view.rs: Main component ContractAnalysisPage

mod model;
pub mod state;
mod view;
mod view_model;

pub use view::ContractAnalysisPage;
pub use view_model::ContractAnalysisVm;

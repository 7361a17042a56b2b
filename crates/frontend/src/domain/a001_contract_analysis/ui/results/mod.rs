mod view;

pub use view::{ResultSection, ResultsView, NO_DATA};

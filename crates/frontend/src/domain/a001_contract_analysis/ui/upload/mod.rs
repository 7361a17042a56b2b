pub mod gate;
mod view;

pub use view::{candidate_from_file, FileInfo, UploadWidget};

pub mod upload;

pub use upload::{validate_upload, NO_FILE_PROVIDED, NO_FILE_SELECTED};

pub mod types;

pub use types::{DemoError, MediaError, TransformError};

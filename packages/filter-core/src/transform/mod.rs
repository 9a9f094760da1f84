pub mod decode;
pub mod encode;
pub mod filters;
pub mod mode;
pub mod pipeline;

pub use decode::{decode_image, normalize};
pub use encode::encode_png;
pub use filters::apply;
pub use mode::Mode;
pub use pipeline::{process, process_with_mode, Processed};

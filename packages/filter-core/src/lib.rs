pub mod constants;
pub mod demo;
pub mod errors;
pub mod transform;
pub mod validation;

// 公開API
pub use constants::{
    BLUR_SIGMA, BRIGHTNESS_FACTOR, CONTRAST_FACTOR, DEFAULT_MODE_NAME, OUTPUT_CONTENT_TYPE,
};
pub use demo::{demo_images, write_demo_images, DemoImage};
pub use errors::{DemoError, MediaError, TransformError};
pub use transform::{
    apply, decode_image, encode_png, process, process_with_mode, Mode, Processed,
};
pub use validation::{validate_upload, NO_FILE_PROVIDED, NO_FILE_SELECTED};

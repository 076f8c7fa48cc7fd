//! Image redaction: decode, blur, re-encode as PNG
//!
//! The base64 text of the re-encoded image is also passed through the
//! text redactor before it is returned.

pub mod blur;
pub mod payload;
pub mod redactor;

use lazy_static::lazy_static;
use scrub_core::Result;

pub use blur::{Blur, BoxBlur, GaussianBlur};
pub use payload::ImagePayload;
pub use redactor::ImageRedactor;

lazy_static! {
    static ref DEFAULT_IMAGE_REDACTOR: ImageRedactor = ImageRedactor::default();
}

/// Blur a base64-encoded image with the default kernel
///
/// Returns the blurred image as base64-encoded PNG.
pub fn scrub_image(image_data_base64: &str) -> Result<String> {
    DEFAULT_IMAGE_REDACTOR.scrub_base64(image_data_base64)
}

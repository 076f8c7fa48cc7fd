use std::sync::Arc;

use image::DynamicImage;
use scrub_core::Result;
use scrub_security::Redactor;

use crate::blur::{Blur, GaussianBlur};
use crate::payload::{self, ImagePayload};

/// decode → blur → PNG encode → base64 → text scrub
pub struct ImageRedactor {
    blur: Box<dyn Blur>,
    redactor: Arc<Redactor>,
}

impl ImageRedactor {
    pub fn new(blur: Box<dyn Blur>, redactor: Arc<Redactor>) -> Self {
        Self { blur, redactor }
    }

    pub fn blur_name(&self) -> &'static str {
        self.blur.name()
    }

    pub fn blur_image(&self, image: &DynamicImage) -> DynamicImage {
        tracing::debug!(
            width = image.width(),
            height = image.height(),
            blur = self.blur.name(),
            "blurring image"
        );
        self.blur.blur(image)
    }

    /// Scrub a base64-encoded image, returning base64-encoded PNG
    pub fn scrub_base64(&self, image_data: &str) -> Result<String> {
        let image = ImagePayload::new(image_data).decode_image()?;
        let blurred = self.blur_image(&image);
        let encoded = ImagePayload::from_image(&blurred)?;

        Ok(self.redactor.scrub(encoded.as_str()))
    }

    /// Scrub raw image bytes, returning raw PNG bytes
    pub fn scrub_png_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        let image = payload::decode_image(data)?;
        let blurred = self.blur_image(&image);
        payload::encode_png(&blurred)
    }
}

impl Default for ImageRedactor {
    fn default() -> Self {
        Self::new(Box::new(GaussianBlur::default()), Arc::new(Redactor::new()))
    }
}

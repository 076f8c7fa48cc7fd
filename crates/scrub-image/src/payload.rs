use std::io::Cursor;

use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use image::{DynamicImage, ImageFormat};
use scrub_core::{Error, Result};

/// Base64-encoded raster image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePayload {
    data: String,
}

impl ImagePayload {
    pub fn new(data: impl Into<String>) -> Self {
        Self { data: data.into() }
    }

    /// Wrap raw image bytes
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self {
            data: BASE64.encode(bytes),
        }
    }

    /// Encode `image` as PNG and wrap it
    pub fn from_image(image: &DynamicImage) -> Result<Self> {
        Ok(Self::from_bytes(&encode_png(image)?))
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    pub fn into_string(self) -> String {
        self.data
    }

    /// Base64-decode the payload; ASCII whitespace (line wrapping) is ignored
    pub fn decode_bytes(&self) -> Result<Vec<u8>> {
        let compact: Vec<u8> = self
            .data
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();

        BASE64
            .decode(compact)
            .map_err(|e| Error::Decode(format!("invalid base64: {}", e)))
    }

    pub fn decode_image(&self) -> Result<DynamicImage> {
        decode_image(&self.decode_bytes()?)
    }
}

pub(crate) fn decode_image(bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|e| Error::Decode(format!("invalid image: {}", e)))
}

pub(crate) fn encode_png(image: &DynamicImage) -> Result<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| Error::Encode(e.to_string()))?;
    Ok(buffer.into_inner())
}

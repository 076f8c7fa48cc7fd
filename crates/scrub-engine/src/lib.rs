//! Composes text, image and structured scrubbing behind one handle

pub mod provider;
pub mod structured;

use std::sync::Arc;

use scrub_config::{BlurKind, Config};
use scrub_core::Result;
use scrub_image::{Blur, BoxBlur, GaussianBlur, ImageRedactor};
use scrub_security::{Redactor, SeparatedText, scrub_text_all};

pub use scrub_security::RedactionInfo;

pub use provider::{MaskProvider, PatternProvider, ProviderRegistry, ScrubbingProvider};

pub struct Scrubber {
    redactor: Arc<Redactor>,
    image_redactor: ImageRedactor,
    layout: SeparatedText,
    mask: char,
    keys: Vec<String>,
}

impl Scrubber {
    pub fn new() -> Self {
        Self::from_config(&Config::default())
    }

    pub fn from_config(config: &Config) -> Self {
        let redactor = Arc::new(Redactor::new());

        let sigma = config.image.sigma;
        if !(sigma.is_finite() && sigma > 0.0) {
            tracing::warn!(sigma, "invalid image.sigma, using default");
        }

        let blur: Box<dyn Blur> = match config.image.blur {
            BlurKind::Gaussian => Box::new(GaussianBlur::new(config.image.sigma)),
            BlurKind::Box => Box::new(BoxBlur::new(config.image.passes)),
        };

        let action_text = &config.scrub.action_text;
        let layout = SeparatedText {
            separator: action_text.separator.clone(),
            name_prefix: action_text.name_prefix.clone(),
            name_suffix: action_text.name_suffix.clone(),
        };

        Self {
            image_redactor: ImageRedactor::new(blur, Arc::clone(&redactor)),
            redactor,
            layout,
            mask: config.scrub.char,
            keys: config.scrub.keys.clone(),
        }
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    pub fn image_redactor(&self) -> &ImageRedactor {
        &self.image_redactor
    }

    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    pub fn scrub_text(&self, text: &str) -> String {
        self.redactor.scrub(text)
    }

    /// Scrub separator-joined keyboard text (`a-b-c`)
    pub fn scrub_separated(&self, text: &str) -> String {
        self.redactor.scrub_separated(text, &self.layout)
    }

    /// Scrub and report per-category counts, along the same path as the
    /// pattern provider's `scrub_text`
    pub fn redact(&self, text: &str, is_separated: bool) -> (String, Vec<RedactionInfo>) {
        if is_separated {
            self.redactor.redact_separated(text, &self.layout)
        } else {
            self.redactor.redact(text)
        }
    }

    pub fn scrub_text_all(&self, text: &str) -> String {
        scrub_text_all(text, self.mask)
    }

    /// Base64 image in, base64 PNG out
    pub fn scrub_image(&self, image_data: &str) -> Result<String> {
        self.image_redactor.scrub_base64(image_data)
    }

    pub fn scrub_png_bytes(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.image_redactor.scrub_png_bytes(data)
    }
}

impl Default for Scrubber {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_uses_mask_and_layout() {
        let mut config = Config::default();
        config.scrub.char = '#';
        config.scrub.action_text.separator = "|".to_string();
        let scrubber = Scrubber::from_config(&config);

        assert_eq!(scrubber.scrub_text_all("abc"), "###");
        assert_eq!(
            scrubber.scrub_separated("0|1|/|0|1|/|1|9|9|0"),
            "*|*|/|*|*|/|*|*|*|*"
        );
    }

    #[test]
    fn test_from_config_selects_blur() {
        let mut config = Config::default();
        config.image.blur = BlurKind::Box;

        let scrubber = Scrubber::from_config(&config);
        assert_eq!(scrubber.image_redactor().blur_name(), "box");
        assert_eq!(Scrubber::new().image_redactor().blur_name(), "gaussian");
    }

    #[test]
    fn test_invalid_sigma_does_not_panic() {
        let image = image::DynamicImage::ImageRgb8(image::RgbImage::from_fn(6, 6, |x, _| {
            image::Rgb([(x * 40) as u8, 0, 0])
        }));
        let payload = scrub_image::ImagePayload::from_image(&image).unwrap();

        for sigma in [-1.0, f32::NAN] {
            let mut config = Config::default();
            config.image.sigma = sigma;
            let scrubber = Scrubber::from_config(&config);

            let output = scrubber.scrub_image(payload.as_str()).unwrap();
            let decoded = scrub_image::ImagePayload::new(output).decode_image().unwrap();
            assert_eq!((decoded.width(), decoded.height()), (6, 6));
        }
    }

    #[test]
    fn test_redact_matches_scrub_path() {
        let scrubber = Scrubber::new();

        let (scrubbed, info) = scrubber.redact("1-2-3-4-5-6-7-8-9-0", true);
        assert_eq!(scrubbed, scrubber.scrub_separated("1-2-3-4-5-6-7-8-9-0"));
        assert_eq!(info.len(), 1);

        let (scrubbed, info) = scrubber.redact("1-2-3-4-5-6-7-8-9-0", false);
        assert_eq!(scrubbed, "1-2-3-4-5-6-7-8-9-0");
        assert!(info.is_empty());
    }

    #[test]
    fn test_scrub_text() {
        let scrubber = Scrubber::new();
        assert_eq!(
            scrubber.scrub_text("reach me at 416 555 0199"),
            "reach me at ***-***-****"
        );
    }
}

//! Scrubbing providers, selectable by modality

use std::sync::Arc;

use scrub_core::{Error, Modality, Result};

use crate::Scrubber;

pub trait ScrubbingProvider: Send + Sync {
    fn name(&self) -> &str;

    fn capabilities(&self) -> &[Modality];

    fn supports(&self, modality: Modality) -> bool {
        self.capabilities().contains(&modality)
    }

    /// Scrub text; `is_separated` marks separator-joined keyboard text
    fn scrub_text(&self, text: &str, is_separated: bool) -> String;

    /// Scrub a base64-encoded image, returning base64-encoded PNG
    fn scrub_image(&self, _image_data: &str) -> Result<String> {
        Err(Error::UnsupportedModality(format!(
            "{} does not scrub {}",
            self.name(),
            Modality::Image
        )))
    }
}

/// Pattern table for text, blur for images
pub struct PatternProvider {
    scrubber: Arc<Scrubber>,
}

impl PatternProvider {
    pub const NAME: &'static str = "pattern";

    pub fn new(scrubber: Arc<Scrubber>) -> Self {
        Self { scrubber }
    }
}

impl ScrubbingProvider for PatternProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn capabilities(&self) -> &[Modality] {
        &[Modality::Text, Modality::Image]
    }

    fn scrub_text(&self, text: &str, is_separated: bool) -> String {
        if is_separated {
            self.scrubber.scrub_separated(text)
        } else {
            self.scrubber.scrub_text(text)
        }
    }

    fn scrub_image(&self, image_data: &str) -> Result<String> {
        self.scrubber.scrub_image(image_data)
    }
}

/// Masks every character regardless of content
pub struct MaskProvider {
    scrubber: Arc<Scrubber>,
}

impl MaskProvider {
    pub const NAME: &'static str = "mask";

    pub fn new(scrubber: Arc<Scrubber>) -> Self {
        Self { scrubber }
    }
}

impl ScrubbingProvider for MaskProvider {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn capabilities(&self) -> &[Modality] {
        &[Modality::Text]
    }

    fn scrub_text(&self, text: &str, _is_separated: bool) -> String {
        self.scrubber.scrub_text_all(text)
    }
}

pub struct ProviderRegistry {
    providers: Vec<Box<dyn ScrubbingProvider>>,
}

impl ProviderRegistry {
    /// Registry with the built-in providers, pattern first
    pub fn new(scrubber: Arc<Scrubber>) -> Self {
        let providers: Vec<Box<dyn ScrubbingProvider>> = vec![
            Box::new(PatternProvider::new(Arc::clone(&scrubber))),
            Box::new(MaskProvider::new(scrubber)),
        ];

        Self { providers }
    }

    pub fn register(&mut self, provider: Box<dyn ScrubbingProvider>) {
        self.providers.push(provider);
    }

    pub fn get(&self, name: &str) -> Option<&dyn ScrubbingProvider> {
        self.providers
            .iter()
            .find(|p| p.name() == name)
            .map(|p| p.as_ref())
    }

    pub fn for_modality(&self, modality: Modality) -> Vec<&dyn ScrubbingProvider> {
        self.providers
            .iter()
            .filter(|p| p.supports(modality))
            .map(|p| p.as_ref())
            .collect()
    }

    pub fn names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

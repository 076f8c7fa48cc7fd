use std::io::Write;

use anyhow::{Context, Result};
use scrub_core::Modality;
use scrub_engine::{ProviderRegistry, Scrubber};

use super::{read_stdin_bytes, read_stdin_string};

pub fn handle(scrubber: &Scrubber, registry: &ProviderRegistry, raw: bool) -> Result<()> {
    if raw {
        let input = read_stdin_bytes()?;
        let output = scrubber.scrub_png_bytes(&input)?;
        std::io::stdout().write_all(&output)?;
        return Ok(());
    }

    let providers = registry.for_modality(Modality::Image);
    let provider = providers
        .first()
        .context("No image scrubbing provider registered")?;

    let input = read_stdin_string()?;
    tracing::info!(provider = provider.name(), bytes = input.len(), "scrubbing image");

    let output = provider.scrub_image(input.trim())?;
    println!("{}", output);

    Ok(())
}

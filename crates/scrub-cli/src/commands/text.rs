use anyhow::Result;
use scrub_core::Modality;
use scrub_engine::{PatternProvider, ProviderRegistry, RedactionInfo, Scrubber, ScrubbingProvider};

use super::read_stdin_string;

pub fn handle(
    scrubber: &Scrubber,
    registry: &ProviderRegistry,
    provider: &str,
    separated: bool,
    report: bool,
) -> Result<()> {
    let Some(provider) = registry.get(provider) else {
        anyhow::bail!(
            "Unknown provider '{}' (available: {})",
            provider,
            registry.names().join(", ")
        );
    };

    if !provider.supports(Modality::Text) {
        anyhow::bail!("Provider '{}' does not scrub text", provider.name());
    }

    if report && provider.name() != PatternProvider::NAME {
        anyhow::bail!(
            "--report is only available with --provider {}",
            PatternProvider::NAME
        );
    }

    let input = read_stdin_string()?;
    let (output, redactions) = scrub_input(scrubber, provider, &input, separated, report);
    print!("{}", output);

    if let Some(redactions) = redactions {
        if redactions.is_empty() {
            eprintln!("No redactions.");
        }
        for info in redactions {
            eprintln!("  {}: {}", info.redaction_type, info.count);
        }
    }

    Ok(())
}

/// Scrub stdin contents; the trailing line ending is kept out of matching
fn scrub_input(
    scrubber: &Scrubber,
    provider: &dyn ScrubbingProvider,
    input: &str,
    separated: bool,
    report: bool,
) -> (String, Option<Vec<RedactionInfo>>) {
    let (body, line_ending) = split_line_ending(input);

    let (scrubbed, redactions) = if report {
        let (scrubbed, redactions) = scrubber.redact(body, separated);
        (scrubbed, Some(redactions))
    } else {
        (provider.scrub_text(body, separated), None)
    };

    (format!("{}{}", scrubbed, line_ending), redactions)
}

fn split_line_ending(input: &str) -> (&str, &str) {
    if let Some(body) = input.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = input.strip_suffix('\n') {
        (body, "\n")
    } else {
        (input, "")
    }
}

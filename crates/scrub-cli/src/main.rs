mod cli;
mod commands;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use scrub_config::Config;
use scrub_engine::{ProviderRegistry, Scrubber};

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the scrubbed payload
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    let scrubber = Arc::new(Scrubber::from_config(&config));
    let registry = ProviderRegistry::new(Arc::clone(&scrubber));

    match cli.command {
        cli::Commands::Text {
            separated,
            provider,
            report,
        } => commands::text::handle(&scrubber, &registry, &provider, separated, report),
        cli::Commands::Image { raw } => commands::image::handle(&scrubber, &registry, raw),
        cli::Commands::Json { all, pretty } => commands::json::handle(&scrubber, all, pretty),
        cli::Commands::Config => commands::config::handle(cli.config.as_deref(), &config),
    }
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scrub")]
#[command(about = "Redact PII/PHI from text, images and recorded events", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true, env = "SCRUB_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrub text read from stdin
    Text {
        /// Input is separator-joined keyboard text (e.g. a-b-c)
        #[arg(long)]
        separated: bool,

        /// Text provider to use (pattern, mask)
        #[arg(long, default_value = "pattern")]
        provider: String,

        /// Print per-category redaction counts to stderr
        #[arg(long)]
        report: bool,
    },

    /// Blur an image read from stdin (base64 by default)
    Image {
        /// Read and write raw image bytes instead of base64
        #[arg(long)]
        raw: bool,
    },

    /// Scrub a JSON document read from stdin
    Json {
        /// Scrub every top-level string field, not only configured keys
        #[arg(long)]
        all: bool,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Show config path and effective settings
    Config,
}

//! FrameLens CLI
//!
//! A command-line frame-property inspector for video files: raw or
//! prettified (categorized, relabeled, value-transformed) views of the
//! metadata attached to a decoded frame.
//!
//! # Usage
//!
//! ```bash
//! framelens props --input "video.mkv" --frame 42
//! framelens props --input "video.mkv" --raw --json
//! framelens rules
//! framelens config --raw true
//! ```

use anyhow::Result;
use clap::Parser;
use tracing::info;

use framelens_cli::cli::{commands, Cli, Commands};
use framelens_cli::config::SessionConfig;

/// Main entry point for the FrameLens CLI application
fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG wins over the persisted default level.
    let config = SessionConfig::load(&SessionConfig::default_path()).unwrap_or_default();
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!("Starting FrameLens");

    // Execute the requested command
    match cli.command {
        Commands::Props(args) => commands::props(args)?,
        Commands::Rules(args) => commands::rules(args)?,
        Commands::Config(args) => commands::config(args)?,
    }

    info!("FrameLens completed successfully");
    Ok(())
}

//! Stillframe CLI - finish captured photos from the command line.
//!
//! Drives the same capture delegate a platform camera would, using an image
//! file as the captured photo.
//!
//! # Usage
//!
//! ```bash
//! # Finish a capture with the configured defaults
//! stillframe finish IMG_0001.jpg -o out/photo.jpg
//!
//! # Square crop, scaled so the shorter side is 1080
//! stillframe finish IMG_0001.jpg -o out/photo.jpg --aspect-ratio 1:1 --target-width 1080
//!
//! # View configuration
//! stillframe config show
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use stillframe_core::FinisherConfig;

mod cli;
mod logging;

/// Stillframe - photo capture finishing.
#[derive(Parser, Debug)]
#[command(name = "stillframe")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    /// Configuration file (TOML)
    #[arg(long, global = true, env = "STILLFRAME_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Finish a captured photo: resize, orient, crop, encode, write
    Finish(cli::finish::FinishArgs),

    /// View configuration
    Config(cli::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = FinisherConfig::load(cli.config.as_deref())?;
    logging::init_from_config(&config, cli.verbose, cli.json_logs);

    tracing::debug!("Stillframe v{}", stillframe_core::VERSION);

    match cli.command {
        Commands::Finish(args) => cli::finish::execute(args, &config).await,
        Commands::Config(args) => cli::config::execute(args, &config).await,
    }
}

//! The `stillframe config` command.

use clap::{Args, Subcommand};
use stillframe_core::FinisherConfig;

/// Arguments for the `config` command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Subcommands for configuration management.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration
    Show,
}

/// Execute the config command.
pub async fn execute(args: ConfigArgs, config: &FinisherConfig) -> anyhow::Result<()> {
    match args.command {
        ConfigCommand::Show => {
            println!("{}", config.to_toml()?);
        }
    }
    Ok(())
}

//! Tracing setup for the `stillframe` binary.
//!
//! Logs go to stderr so stdout carries only the result descriptor.
//! `RUST_LOG` takes precedence over the configured level.

use std::io::IsTerminal;

use stillframe_core::FinisherConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Level and format after merging `[logging]` with command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    pub level: String,
    pub json: bool,
}

impl LogSettings {
    /// `--verbose` raises the level to at least `debug`; `--json-logs`
    /// forces JSON output.
    pub fn resolve(config: &FinisherConfig, verbose: bool, json_logs: bool) -> Self {
        let configured = config.logging.level.as_str();
        let level = match configured {
            "debug" | "trace" => configured,
            _ if verbose => "debug",
            _ => configured,
        };
        Self {
            level: level.to_string(),
            json: json_logs || config.logging.format == "json",
        }
    }
}

/// Install the global subscriber. Exactly one of the two format layers is
/// present.
pub fn init(settings: &LogSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(settings.level.as_str()));

    let json = settings
        .json
        .then(|| fmt::layer().json().with_writer(std::io::stderr));
    let pretty = (!settings.json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_ansi(std::io::stderr().is_terminal())
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(json)
        .with(pretty)
        .init();
}

/// Resolve settings from the config and flags, then install the subscriber.
pub fn init_from_config(config: &FinisherConfig, verbose: bool, json_logs: bool) {
    init(&LogSettings::resolve(config, verbose, json_logs));
}

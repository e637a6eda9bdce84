//! Config
//!
//! Command line and environment configuration for the `takeout` binary.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use tracing::info;

use crate::menu::{MenuCatalog, MenuError, fixtures::load_menu};

/// Log output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Compact, human-readable logs.
    Compact,

    /// Structured JSON logs.
    Json,
}

/// Logging settings.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log level or filter directives (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log format (compact, json)
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

/// Take-out ordering configuration
#[derive(Debug, Parser)]
#[command(name = "takeout", about = "Take-out restaurant ordering simulator", long_about = None)]
pub struct Config {
    /// YAML menu file; the built-in house menu is used when omitted
    #[arg(short, long, env = "TAKEOUT_MENU")]
    pub menu: Option<PathBuf>,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// The menu to order from: the configured file, or the house menu.
    ///
    /// # Errors
    ///
    /// Returns a [`MenuError`] if the configured menu file cannot be loaded.
    pub fn catalog(&self) -> Result<MenuCatalog, MenuError> {
        let Some(path) = &self.menu else {
            info!("using house menu");

            return Ok(MenuCatalog::house());
        };

        info!(path = %path.display(), "loading menu");

        load_menu(path)
    }
}

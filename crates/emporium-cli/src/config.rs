//! CLI configuration file.
//!
//! ```toml
//! format = "csv"
//!
//! [calendar]
//! strike_column = "strike_relative"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use emporium_analytics::CalendarConfig;

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// Settings read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Default output format.
    pub format: OutputFormat,
    /// Calendar calculation settings.
    pub calendar: CalendarConfig,
}

impl CliConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        let config = toml::from_str(&content)
            .map_err(|e| CliError::Config(format!("{}: {e}", path.display())))?;
        debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Loads the file if one was given, otherwise the defaults.
    pub fn load(path: Option<&Path>) -> CliResult<Self> {
        path.map_or_else(|| Ok(Self::default()), Self::from_file)
    }
}

/// Resolved settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress non-essential output.
    pub quiet: bool,
    /// Calendar calculation settings.
    pub calendar: CalendarConfig,
}

impl Settings {
    /// Applies command-line overrides on top of the file configuration.
    pub fn resolve(config: CliConfig, format: Option<OutputFormat>, quiet: bool) -> Self {
        Self {
            format: format.unwrap_or(config.format),
            quiet,
            calendar: config.calendar,
        }
    }
}

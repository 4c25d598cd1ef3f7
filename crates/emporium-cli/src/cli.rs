//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{CalendarArgs, ColumnsArgs, ScreenArgs, SpreadsArgs};

/// Emporium - calendar spread metrics over quote tables
#[derive(Parser)]
#[command(name = "emporium")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (overrides the config file)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file (TOML)
    #[arg(short, long, global = true, env = "EMPORIUM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Bid-ask spreads for the front leg, back leg and calendar
    Spreads(SpreadsArgs),

    /// Calendar cost and strike gap metrics
    Calendar(CalendarArgs),

    /// Spreads and calendar metrics in one pass
    Screen(ScreenArgs),

    /// List the columns of a quote file
    Columns(ColumnsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON records
    Json,
    /// CSV format
    Csv,
}

//! Calendar command implementation.
//!
//! Adds calendar cost and strike gap columns.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use emporium_analytics::cost::calendar_calculations_with;

use crate::commands::{calendar_config, load_quotes, StrikeColumnArg};
use crate::config::Settings;
use crate::output::emit_table;

/// Arguments for the calendar command.
#[derive(Args, Debug)]
pub struct CalendarArgs {
    /// Input quote file (CSV with header)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the result as CSV to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Strike reference column (overrides the config file)
    #[arg(long, value_enum)]
    pub strike_column: Option<StrikeColumnArg>,
}

/// Execute the calendar command.
pub fn execute(args: CalendarArgs, settings: &Settings) -> Result<()> {
    let quotes = load_quotes(&args.input)?;
    let config = calendar_config(&settings.calendar, args.strike_column);

    let result = calendar_calculations_with(&quotes, &config)?;

    emit_table(&result, args.output.as_deref(), settings)?;
    Ok(())
}

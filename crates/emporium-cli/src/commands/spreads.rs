//! Spreads command implementation.
//!
//! Adds bid-ask spread columns for one leg, or for both legs and the
//! synthetic calendar quote.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};

use emporium_analytics::spreads::{calculate_fb_spread, calculate_spreads, Leg};

use crate::commands::load_quotes;
use crate::config::Settings;
use crate::output::emit_table;

/// Arguments for the spreads command.
#[derive(Args, Debug)]
pub struct SpreadsArgs {
    /// Input quote file (CSV with header)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Write the result as CSV to this file instead of printing it
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Which spreads to calculate
    #[arg(long, value_enum, default_value = "all")]
    pub leg: LegSelection,
}

/// Leg selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LegSelection {
    /// Front leg only
    Front,
    /// Back leg only
    Back,
    /// Front, back and calendar
    All,
}

/// Execute the spreads command.
pub fn execute(args: SpreadsArgs, settings: &Settings) -> Result<()> {
    let quotes = load_quotes(&args.input)?;

    let result = match args.leg {
        LegSelection::Front => calculate_fb_spread(&quotes, Leg::Front)?,
        LegSelection::Back => calculate_fb_spread(&quotes, Leg::Back)?,
        LegSelection::All => calculate_spreads(&quotes)?,
    };

    emit_table(&result, args.output.as_deref(), settings)?;
    Ok(())
}

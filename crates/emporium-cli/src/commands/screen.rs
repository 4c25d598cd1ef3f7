//! Screen command implementation.
//!
//! Runs every transform over a quote file: leg and calendar spreads, then
//! calendar cost and gap.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use tracing::warn;

use emporium_analytics::screen::{screen, SCREEN_COLUMNS};
use emporium_core::Column;

use crate::commands::{calendar_config, load_quotes, StrikeColumnArg};
use crate::config::Settings;
use crate::output::emit_table;

/// Arguments for the screen command.
#[derive(Args, Debug)]
pub struct ScreenArgs {
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

/// Execute the screen command.
pub fn execute(args: ScreenArgs, settings: &Settings) -> Result<()> {
    let quotes = load_quotes(&args.input)?;
    let config = calendar_config(&settings.calendar, args.strike_column);

    let result = screen(&quotes, &config)?;

    for name in SCREEN_COLUMNS {
        let undefined = result
            .column(name)
            .and_then(Column::as_f32)
            .map_or(0, |values| values.iter().filter(|v| v.is_nan()).count());
        if undefined > 0 {
            warn!("{name}: {undefined} of {} rows undefined", result.n_rows());
        }
    }

    emit_table(&result, args.output.as_deref(), settings)?;
    Ok(())
}

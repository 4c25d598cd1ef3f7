//! CLI command implementations.

pub mod calendar;
pub mod columns;
pub mod screen;
pub mod spreads;

// Re-export submodules for convenience
pub use calendar::CalendarArgs;
pub use columns::ColumnsArgs;
pub use screen::ScreenArgs;
pub use spreads::SpreadsArgs;

use std::path::Path;

use clap::ValueEnum;
use tracing::info;

use emporium_analytics::{CalendarConfig, StrikeColumn};
use emporium_core::io::read_csv_path;
use emporium_core::QuoteTable;

use crate::error::CliResult;

/// Strike reference column selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrikeColumnArg {
    /// The `strike` column
    #[value(name = "strike")]
    Strike,
    /// The `strike_relative` column
    #[value(name = "strike_relative")]
    StrikeRelative,
}

impl From<StrikeColumnArg> for StrikeColumn {
    fn from(arg: StrikeColumnArg) -> Self {
        match arg {
            StrikeColumnArg::Strike => StrikeColumn::Strike,
            StrikeColumnArg::StrikeRelative => StrikeColumn::StrikeRelative,
        }
    }
}

/// Reads a quote file.
pub fn load_quotes(path: &Path) -> CliResult<QuoteTable> {
    let table = read_csv_path(path)?;
    info!(
        "loaded {} rows x {} columns from {}",
        table.n_rows(),
        table.n_columns(),
        path.display()
    );
    Ok(table)
}

/// Calendar settings with an optional command-line strike override.
pub fn calendar_config(base: &CalendarConfig, strike: Option<StrikeColumnArg>) -> CalendarConfig {
    match strike {
        Some(arg) => base.clone().with_strike_column(arg.into()),
        None => base.clone(),
    }
}

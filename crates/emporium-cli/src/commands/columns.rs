//! Columns command implementation.
//!
//! Lists the columns of a quote file with their element type and how many
//! cells are empty.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use emporium_core::{Column, QuoteTable};

use crate::commands::load_quotes;
use crate::config::Settings;
use crate::output::print_output;

/// Arguments for the columns command.
#[derive(Args, Debug)]
pub struct ColumnsArgs {
    /// Input quote file (CSV with header)
    #[arg(short, long)]
    pub input: PathBuf,
}

/// One column summary row.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct ColumnInfo {
    #[tabled(rename = "Column")]
    pub name: String,
    #[tabled(rename = "Type")]
    pub dtype: String,
    #[tabled(rename = "Rows")]
    pub rows: usize,
    #[tabled(rename = "Empty")]
    pub empty: usize,
}

/// Summarises every column of a table.
pub fn describe(table: &QuoteTable) -> Vec<ColumnInfo> {
    table
        .iter()
        .map(|(name, column)| ColumnInfo {
            name: name.to_string(),
            dtype: column.dtype().to_string(),
            rows: column.len(),
            empty: empty_cells(column),
        })
        .collect()
}

fn empty_cells(column: &Column) -> usize {
    match column {
        Column::Float64(v) => v.iter().filter(|x| x.is_nan()).count(),
        Column::Float32(v) => v.iter().filter(|x| x.is_nan()).count(),
        Column::Text(v) => v.iter().filter(|s| s.is_empty()).count(),
    }
}

/// Execute the columns command.
pub fn execute(args: ColumnsArgs, settings: &Settings) -> Result<()> {
    let quotes = load_quotes(&args.input)?;
    print_output(&describe(&quotes), settings.format)?;
    Ok(())
}

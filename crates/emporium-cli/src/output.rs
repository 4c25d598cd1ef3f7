//! Output formatting utilities.

use std::path::Path;

use colored::Colorize;
use serde::Serialize;
use tabled::{
    builder::Builder,
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

use emporium_core::io::{write_csv, write_csv_path};
use emporium_core::QuoteTable;

use crate::cli::OutputFormat;
use crate::config::Settings;
use crate::error::CliResult;

/// Writes a result table to `output` as CSV, or prints it in the chosen format.
pub fn emit_table(table: &QuoteTable, output: Option<&Path>, settings: &Settings) -> CliResult<()> {
    if let Some(path) = output {
        write_csv_path(table, path)?;
        if !settings.quiet {
            print_success(&format!(
                "wrote {} rows x {} columns to {}",
                table.n_rows(),
                table.n_columns(),
                path.display()
            ));
        }
        return Ok(());
    }

    match settings.format {
        OutputFormat::Table => print_quote_table(table),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&table.to_json_records())?);
        }
        OutputFormat::Csv => write_csv(table, std::io::stdout().lock())?,
    }
    Ok(())
}

/// Formats and prints a list of rows based on the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) -> CliResult<()> {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("No results.");
            } else {
                let table = Table::new(data)
                    .with(Style::rounded())
                    .with(Modify::new(Columns::first()).with(Alignment::left()))
                    .to_string();
                println!("{}", table);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(data)?),
        OutputFormat::Csv => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for item in data {
                wtr.serialize(item)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}

/// Prints a quote table with a header row.
fn print_quote_table(table: &QuoteTable) {
    if table.n_columns() == 0 {
        println!("No results.");
        return;
    }

    let mut rows: Vec<Vec<String>> = Vec::with_capacity(table.n_rows() + 1);
    rows.push(table.column_names().to_vec());
    rows.extend((0..table.n_rows()).map(|row| table.row(row)));

    let rendered = Builder::from(rows)
        .build()
        .with(Style::rounded())
        .with(Modify::new(Columns::new(1..)).with(Alignment::right()))
        .to_string();
    println!("{}", rendered);
}

/// Prints a success message.
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message);
}

/// Prints an error message.
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

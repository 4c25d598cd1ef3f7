//! CSV import and export of quote tables.
//!
//! A column whose non-empty cells all parse as numbers is read as `Float64`
//! with empty cells as NaN; anything else is kept as `Text`. On output NaN is
//! written as an empty cell.

use std::collections::HashSet;
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use log::debug;
use ndarray::Array1;

use crate::error::{EmporiumError, EmporiumResult};
use crate::table::{Column, QuoteTable};

/// Reads a quote table from CSV with a header row.
pub fn read_csv<R: Read>(reader: R) -> EmporiumResult<QuoteTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

    let mut seen = HashSet::new();
    if let Some(dup) = headers.iter().find(|h| !seen.insert(h.as_str())) {
        return Err(EmporiumError::Csv(format!("duplicate column '{dup}'")));
    }

    let mut cells: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
    for record in rdr.records() {
        let record = record?;
        for (idx, field) in record.iter().enumerate() {
            cells[idx].push(field.to_string());
        }
    }

    let mut table = QuoteTable::new();
    for (name, raw) in headers.into_iter().zip(cells) {
        table.insert_column(name, infer_column(raw))?;
    }

    debug!(
        "read {} rows x {} columns from csv",
        table.n_rows(),
        table.n_columns()
    );
    Ok(table)
}

/// Reads a quote table from a CSV file.
pub fn read_csv_path(path: impl AsRef<Path>) -> EmporiumResult<QuoteTable> {
    let file = File::open(path.as_ref())?;
    read_csv(file)
}

/// Writes a quote table as CSV with a header row.
pub fn write_csv<W: Write>(table: &QuoteTable, writer: W) -> EmporiumResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(table.column_names())?;
    for row in 0..table.n_rows() {
        wtr.write_record(table.row(row))?;
    }
    wtr.flush()?;
    Ok(())
}

/// Writes a quote table to a CSV file, creating or truncating it.
pub fn write_csv_path(table: &QuoteTable, path: impl AsRef<Path>) -> EmporiumResult<()> {
    let file = File::create(path.as_ref())?;
    write_csv(table, file)
}

fn infer_column(raw: Vec<String>) -> Column {
    let parsed: Option<Vec<f64>> = raw
        .iter()
        .map(|cell| {
            if cell.is_empty() {
                Some(f64::NAN)
            } else {
                cell.parse::<f64>().ok()
            }
        })
        .collect();

    match parsed {
        Some(values) => Column::Float64(Array1::from(values)),
        None => Column::Text(raw),
    }
}

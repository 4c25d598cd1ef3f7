//! Columnar quote table.
//!
//! A [`QuoteTable`] is an ordered set of named, equal-length columns. Raw
//! quotes arrive as `Float64`, every derived metric is stored as `Float32`,
//! and identifiers read from CSV ride along as `Text`.

use std::fmt;

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::{EmporiumError, EmporiumResult};

/// Element type of a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DType {
    /// 64-bit float (raw input).
    Float64,
    /// 32-bit float (derived metrics).
    Float32,
    /// Pass-through text.
    Text,
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Float64 => "float64",
            Self::Float32 => "float32",
            Self::Text => "text",
        };
        write!(f, "{name}")
    }
}

/// A single column of a [`QuoteTable`].
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    /// 64-bit float values.
    Float64(Array1<f64>),
    /// 32-bit float values.
    Float32(Array1<f32>),
    /// Text values.
    Text(Vec<String>),
}

impl Column {
    /// Number of elements.
    pub fn len(&self) -> usize {
        match self {
            Self::Float64(v) => v.len(),
            Self::Float32(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    /// Returns true if the column has no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element type.
    pub fn dtype(&self) -> DType {
        match self {
            Self::Float64(_) => DType::Float64,
            Self::Float32(_) => DType::Float32,
            Self::Text(_) => DType::Text,
        }
    }

    /// Returns true for float columns.
    pub fn is_numeric(&self) -> bool {
        !matches!(self, Self::Text(_))
    }

    /// Values widened to `f64`, or `None` for a text column.
    pub fn to_f64(&self) -> Option<Array1<f64>> {
        match self {
            Self::Float64(v) => Some(v.clone()),
            Self::Float32(v) => Some(v.mapv(f64::from)),
            Self::Text(_) => None,
        }
    }

    /// Borrow the `f32` values if this is a `Float32` column.
    pub fn as_f32(&self) -> Option<&Array1<f32>> {
        match self {
            Self::Float32(v) => Some(v),
            _ => None,
        }
    }

    /// Borrow the `f64` values if this is a `Float64` column.
    pub fn as_f64(&self) -> Option<&Array1<f64>> {
        match self {
            Self::Float64(v) => Some(v),
            _ => None,
        }
    }

    /// Renders one cell for text output. NaN renders as an empty string.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn format_value(&self, row: usize) -> String {
        match self {
            Self::Float64(v) if v[row].is_nan() => String::new(),
            Self::Float64(v) => v[row].to_string(),
            Self::Float32(v) if v[row].is_nan() => String::new(),
            Self::Float32(v) => v[row].to_string(),
            Self::Text(v) => v[row].clone(),
        }
    }

    /// Renders one cell as JSON. Non-finite floats become `null`.
    ///
    /// `f32` values go through their shortest decimal form so `0.6087f32`
    /// serializes as `0.6087` rather than its widened binary expansion.
    fn json_value(&self, row: usize) -> Value {
        let number = match self {
            Self::Float64(v) => Number::from_f64(v[row]),
            Self::Float32(v) => v[row]
                .to_string()
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64),
            Self::Text(v) => return Value::String(v[row].clone()),
        };
        number.map_or(Value::Null, Value::Number)
    }
}

impl From<Array1<f64>> for Column {
    fn from(values: Array1<f64>) -> Self {
        Self::Float64(values)
    }
}

impl From<Vec<f64>> for Column {
    fn from(values: Vec<f64>) -> Self {
        Self::Float64(Array1::from(values))
    }
}

impl From<Array1<f32>> for Column {
    fn from(values: Array1<f32>) -> Self {
        Self::Float32(values)
    }
}

impl From<Vec<f32>> for Column {
    fn from(values: Vec<f32>) -> Self {
        Self::Float32(Array1::from(values))
    }
}

impl From<Vec<String>> for Column {
    fn from(values: Vec<String>) -> Self {
        Self::Text(values)
    }
}

/// Ordered collection of named, equal-length columns.
///
/// Column order is insertion order. Replacing a column keeps its position.
/// A table without columns has zero rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuoteTable {
    n_rows: usize,
    names: Vec<String>,
    columns: Vec<Column>,
}

impl QuoteTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, column)` pairs.
    pub fn from_columns<I, N, C>(columns: I) -> EmporiumResult<Self>
    where
        I: IntoIterator<Item = (N, C)>,
        N: Into<String>,
        C: Into<Column>,
    {
        let mut table = Self::new();
        for (name, column) in columns {
            table.insert_column(name, column)?;
        }
        Ok(table)
    }

    /// Builder-style insert.
    pub fn with_column(
        mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> EmporiumResult<Self> {
        self.insert_column(name, column)?;
        Ok(self)
    }

    /// Inserts a column, replacing any column of the same name in place.
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn insert_column(
        &mut self,
        name: impl Into<String>,
        column: impl Into<Column>,
    ) -> EmporiumResult<()> {
        let name = name.into();
        let column = column.into();

        if self.columns.is_empty() {
            self.n_rows = column.len();
        } else if column.len() != self.n_rows {
            return Err(EmporiumError::ColumnLength {
                column: name,
                expected: self.n_rows,
                actual: column.len(),
            });
        }

        match self.position(&name) {
            Some(idx) => self.columns[idx] = column,
            None => {
                self.names.push(name);
                self.columns.push(column);
            }
        }
        Ok(())
    }

    /// Number of rows.
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Returns true if a column with this name exists.
    pub fn has_column(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    /// Looks up a column.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|idx| &self.columns[idx])
    }

    /// Element type of a column.
    pub fn dtype(&self, name: &str) -> Option<DType> {
        self.column(name).map(Column::dtype)
    }

    /// Iterates `(name, column)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Numeric values of a column widened to `f64`.
    pub fn values_f64(&self, name: &str) -> EmporiumResult<Array1<f64>> {
        let column = self
            .column(name)
            .ok_or_else(|| EmporiumError::missing_columns(vec![name.to_string()]))?;
        column
            .to_f64()
            .ok_or_else(|| EmporiumError::NonNumericColumn {
                column: name.to_string(),
            })
    }

    /// Renders one row as display strings, in column order.
    ///
    /// # Panics
    ///
    /// Panics if `row >= self.n_rows()`.
    pub fn row(&self, row: usize) -> Vec<String> {
        self.columns.iter().map(|c| c.format_value(row)).collect()
    }

    /// Converts the table to JSON records, one object per row.
    pub fn to_json_records(&self) -> Vec<Map<String, Value>> {
        (0..self.n_rows)
            .map(|row| {
                self.iter()
                    .map(|(name, column)| (name.to_string(), column.json_value(row)))
                    .collect()
            })
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }
}

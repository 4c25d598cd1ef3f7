//! # Emporium Core
//!
//! Core types for the Emporium calendar spread toolkit.
//!
//! This crate provides the pieces every transform is built on:
//!
//! - **Table**: [`QuoteTable`], an ordered set of named `ndarray` columns
//! - **Precision**: the round-to-5-places-then-`f32` policy ([`precision::fc32`])
//! - **Validation**: required-column checks run before any arithmetic
//! - **I/O**: CSV import and export of quote tables
//!
//! ## Example
//!
//! ```rust
//! use emporium_core::prelude::*;
//!
//! let table = QuoteTable::from_columns([
//!     ("ask_front", vec![55.0, 160.0]),
//!     ("bid_front", vec![45.0, 140.0]),
//! ])?;
//!
//! assert!(required_column_check(&table, &["ask_front", "bid_front"])?);
//! assert!(required_column_check(&table, &["strike"]).is_err());
//! # Ok::<(), EmporiumError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod io;
pub mod precision;
pub mod table;
pub mod validation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{EmporiumError, EmporiumResult};
    pub use crate::io::{read_csv, read_csv_path, write_csv, write_csv_path};
    pub use crate::precision::{coerce_f32, fc32, ratio, safe_ratio, PRECISION_DECIMALS};
    pub use crate::table::{Column, DType, QuoteTable};
    pub use crate::validation::{missing_columns, required_column_check};
}

// Re-export commonly used types at crate root
pub use error::{EmporiumError, EmporiumResult};
pub use table::{Column, DType, QuoteTable};

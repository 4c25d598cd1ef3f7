//! # Emporium
//!
//! Derived pricing metrics for options calendar spreads over quote tables.
//!
//! This crate re-exports [`emporium_core`] and [`emporium_analytics`] under
//! one name.
//!
//! ```rust
//! use emporium::prelude::*;
//!
//! let quotes = QuoteTable::from_columns([
//!     ("mark_back", vec![100.0]),
//!     ("mark_front", vec![50.0]),
//!     ("strike", vec![120.0]),
//!     ("underlying", vec![100.0]),
//! ])?;
//! let out = calendar_calculations(&quotes)?;
//! let gap = out.column("calGapPct").and_then(Column::as_f32).unwrap();
//! assert_eq!(gap[0], 0.2);
//! # Ok::<(), EmporiumError>(())
//! ```

#![warn(missing_docs)]

pub use emporium_analytics;
pub use emporium_core;

pub use emporium_analytics::{CalendarConfig, Leg, StrikeColumn};
pub use emporium_core::{Column, DType, EmporiumError, EmporiumResult, QuoteTable};

/// Everything from both preludes.
pub mod prelude {
    pub use emporium_analytics::prelude::*;
    pub use emporium_core::prelude::*;
}

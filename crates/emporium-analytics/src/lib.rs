//! # Emporium Analytics
//!
//! Derived pricing metrics for options calendar spreads.
//!
//! Every transform takes a [`QuoteTable`](emporium_core::QuoteTable) by
//! reference, checks its required columns, and returns a new table with the
//! derived `f32` columns added. The input is never modified.
//!
//! - **Leg spreads**: `spread_<leg>`, `spreadPct_<leg>` for front and back
//! - **Calendar spread**: synthetic `ask_cal`/`bid_cal`/`mark_cal`, then
//!   `spread_cal`, `spreadPct_cal`
//! - **Calendar cost**: `calCost`, `calCostPct`, `calGapPct`, `undPricePctDiff`
//!
//! ## Usage
//!
//! ```rust
//! use emporium_analytics::prelude::*;
//! use emporium_core::QuoteTable;
//!
//! let quotes = QuoteTable::from_columns([
//!     ("ask_front", vec![55.0]),
//!     ("bid_front", vec![45.0]),
//!     ("ask_back", vec![105.0]),
//!     ("bid_back", vec![95.0]),
//!     ("mark_front", vec![50.0]),
//!     ("mark_back", vec![100.0]),
//!     ("strike", vec![120.0]),
//!     ("underlying", vec![100.0]),
//! ])?;
//!
//! let screened = screen(&quotes, &CalendarConfig::default())?;
//! assert_eq!(screened.n_rows(), 1);
//! for name in SCREEN_COLUMNS {
//!     assert!(screened.has_column(name));
//! }
//! # Ok::<(), emporium_core::EmporiumError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod columns;
pub mod config;
pub mod cost;
pub mod screen;
pub mod spreads;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::{CalendarConfig, StrikeColumn};
    pub use crate::cost::{calendar_calculations, calendar_calculations_with};
    pub use crate::screen::{screen, SCREEN_COLUMNS};
    pub use crate::spreads::{
        calculate_cal_spread, calculate_fb_spread, calculate_spreads, derive_calendar_quote,
        CalendarQuote, CalendarQuoteSource, Leg,
    };
}

pub use config::{CalendarConfig, StrikeColumn};
pub use spreads::Leg;

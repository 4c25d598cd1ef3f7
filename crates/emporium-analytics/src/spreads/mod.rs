//! Bid-ask spread metrics.
//!
//! - [`calculate_fb_spread`]: width and width-over-mid for one leg
//! - [`calculate_cal_spread`]: the same for the synthetic calendar quote
//! - [`calculate_spreads`]: front, back and calendar together

mod calendar;
mod combined;
mod leg;

pub use calendar::{calculate_cal_spread, derive_calendar_quote, CalendarQuote, CalendarQuoteSource};
pub use combined::calculate_spreads;
pub use leg::{calculate_fb_spread, Leg};

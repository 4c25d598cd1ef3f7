//! Synthetic calendar quote and its bid-ask spread.
//!
//! The calendar quote is derived from the legs:
//!
//! ```text
//! ask_cal  = bid_front - ask_back
//! bid_cal  = ask_front - bid_back
//! mark_cal = (ask_cal + bid_cal) / 2
//! ```
//!
//! When all four leg quotes are on the table the calendar quote is always
//! re-derived from them. Otherwise `ask_cal`, `bid_cal` and `mark_cal` must
//! already be present and are read from the table.
//!
//! Either way the quote is coerced to `f32` before the spread is taken, so
//! the spread of a table equals the spread of its own output.

use log::debug;
use ndarray::Array1;

use emporium_core::precision::{fc32, ratio};
use emporium_core::validation::{missing_columns, required_column_check};
use emporium_core::{EmporiumResult, QuoteTable};

use crate::columns::{
    ASK_BACK, ASK_CAL, ASK_FRONT, BID_BACK, BID_CAL, BID_FRONT, CALENDAR_QUOTE, LEG_QUOTES,
    MARK_CAL, SPREAD_CAL, SPREAD_PCT_CAL,
};

/// Where a calendar quote came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarQuoteSource {
    /// Derived from the four leg quotes.
    Legs,
    /// Read from existing `ask_cal`/`bid_cal`/`mark_cal` columns.
    Table,
}

/// Synthetic calendar quote at full precision.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarQuote {
    /// Calendar ask.
    pub ask: Array1<f64>,
    /// Calendar bid.
    pub bid: Array1<f64>,
    /// Calendar mark.
    pub mark: Array1<f64>,
    /// Provenance.
    pub source: CalendarQuoteSource,
}

impl CalendarQuote {
    /// Derives the calendar quote from the leg quotes.
    pub fn from_legs(table: &QuoteTable) -> EmporiumResult<Self> {
        required_column_check(table, &LEG_QUOTES)?;

        let ask_front = table.values_f64(ASK_FRONT)?;
        let bid_front = table.values_f64(BID_FRONT)?;
        let ask_back = table.values_f64(ASK_BACK)?;
        let bid_back = table.values_f64(BID_BACK)?;

        let ask = &bid_front - &ask_back;
        let bid = &ask_front - &bid_back;
        let mark = (&ask + &bid) / 2.0;

        Ok(Self {
            ask,
            bid,
            mark,
            source: CalendarQuoteSource::Legs,
        })
    }

    /// Reads an existing calendar quote.
    pub fn from_columns(table: &QuoteTable) -> EmporiumResult<Self> {
        required_column_check(table, &CALENDAR_QUOTE)?;

        Ok(Self {
            ask: table.values_f64(ASK_CAL)?,
            bid: table.values_f64(BID_CAL)?,
            mark: table.values_f64(MARK_CAL)?,
            source: CalendarQuoteSource::Table,
        })
    }

    /// Derives from the legs when all four are present, otherwise reads the
    /// existing calendar columns.
    pub fn resolve(table: &QuoteTable) -> EmporiumResult<Self> {
        if missing_columns(table, &LEG_QUOTES).is_empty() {
            Self::from_legs(table)
        } else {
            Self::from_columns(table)
        }
    }

    /// The same quote after the `f32` precision policy, widened back to `f64`.
    #[must_use]
    pub fn coerced(self) -> Self {
        Self {
            ask: fc32(&self.ask).mapv(f64::from),
            bid: fc32(&self.bid).mapv(f64::from),
            mark: fc32(&self.mark).mapv(f64::from),
            source: self.source,
        }
    }

    /// Bid-ask width.
    pub fn spread(&self) -> Array1<f64> {
        &self.ask - &self.bid
    }

    /// Width over mark, NaN where the mark is zero.
    pub fn spread_pct(&self) -> Array1<f64> {
        ratio(&self.spread(), &self.mark)
    }
}

/// Adds `ask_cal`, `bid_cal` and `mark_cal` derived from the leg quotes.
///
/// Requires `ask_front`, `bid_front`, `ask_back`, `bid_back`.
pub fn derive_calendar_quote(table: &QuoteTable) -> EmporiumResult<QuoteTable> {
    let quote = CalendarQuote::from_legs(table)?;
    let mut out = table.clone();
    write_quote(&mut out, &quote)?;
    Ok(out)
}

/// Adds `spread_cal` and `spreadPct_cal` for the synthetic calendar quote.
///
/// The calendar quote is resolved with [`CalendarQuote::resolve`] and written
/// back as `f32` `ask_cal`, `bid_cal` and `mark_cal`, whichever path supplied
/// it. Spread metrics are computed from those coerced values.
///
/// `spreadPct_cal` is NaN on every row where `mark_cal` is zero.
pub fn calculate_cal_spread(table: &QuoteTable) -> EmporiumResult<QuoteTable> {
    let quote = CalendarQuote::resolve(table)?.coerced();
    let spread = quote.spread();
    let spread_pct = quote.spread_pct();

    let undefined = spread_pct.iter().filter(|v| v.is_nan()).count();
    debug!(
        "calendar spread over {} rows from {:?} ({} undefined pct)",
        table.n_rows(),
        quote.source,
        undefined
    );

    let mut out = table.clone();
    write_quote(&mut out, &quote)?;
    out.insert_column(SPREAD_CAL, fc32(&spread))?;
    out.insert_column(SPREAD_PCT_CAL, fc32(&spread_pct))?;
    Ok(out)
}

fn write_quote(out: &mut QuoteTable, quote: &CalendarQuote) -> EmporiumResult<()> {
    out.insert_column(ASK_CAL, fc32(&quote.ask))?;
    out.insert_column(BID_CAL, fc32(&quote.bid))?;
    out.insert_column(MARK_CAL, fc32(&quote.mark))?;
    Ok(())
}

//! Calendar cost and strike gap.
//!
//! ```text
//! calCost         = mark_back - mark_front
//! calCostPct      = calCost / mark_front
//! calGapPct       = (strike - underlying) / underlying
//! undPricePctDiff = (underlying - strike) / strike
//! ```
//!
//! Any ratio with a zero denominator is NaN for that row.

use log::debug;

use emporium_core::precision::{fc32, ratio};
use emporium_core::validation::required_column_check;
use emporium_core::{EmporiumResult, QuoteTable};

use crate::columns::{CAL_COST, CAL_COST_PCT, CAL_GAP_PCT, UNDERLYING, UND_PRICE_PCT_DIFF};
use crate::config::CalendarConfig;
use crate::spreads::Leg;

/// Adds `calCost`, `calCostPct`, `calGapPct` and `undPricePctDiff` using the
/// canonical `strike` column.
pub fn calendar_calculations(table: &QuoteTable) -> EmporiumResult<QuoteTable> {
    calendar_calculations_with(table, &CalendarConfig::default())
}

/// As [`calendar_calculations`], reading the strike from the configured column.
pub fn calendar_calculations_with(
    table: &QuoteTable,
    config: &CalendarConfig,
) -> EmporiumResult<QuoteTable> {
    let strike_column = config.strike_column.column_name();
    let (back, front) = (Leg::Back.mark_column(), Leg::Front.mark_column());
    required_column_check(table, &[back, front, strike_column, UNDERLYING])?;

    let mark_back = table.values_f64(back)?;
    let mark_front = table.values_f64(front)?;
    let strike = table.values_f64(strike_column)?;
    let underlying = table.values_f64(UNDERLYING)?;

    let cal_cost = &mark_back - &mark_front;
    let cal_cost_pct = ratio(&cal_cost, &mark_front);
    let cal_gap_pct = ratio(&(&strike - &underlying), &underlying);
    let und_price_pct_diff = ratio(&(&underlying - &strike), &strike);

    debug!(
        "calendar cost over {} rows using '{}'",
        table.n_rows(),
        strike_column
    );

    let mut out = table.clone();
    out.insert_column(CAL_COST, fc32(&cal_cost))?;
    out.insert_column(CAL_COST_PCT, fc32(&cal_cost_pct))?;
    out.insert_column(CAL_GAP_PCT, fc32(&cal_gap_pct))?;
    out.insert_column(UND_PRICE_PCT_DIFF, fc32(&und_price_pct_diff))?;
    Ok(out)
}

//! Full screening pass: spreads followed by calendar cost and gap.

use emporium_core::{EmporiumResult, QuoteTable};

use crate::config::CalendarConfig;
use crate::cost::calendar_calculations_with;
use crate::spreads::calculate_spreads;

/// Derived columns added by [`screen`], in output order.
pub const SCREEN_COLUMNS: [&str; 10] = [
    "spread_front",
    "spreadPct_front",
    "spread_back",
    "spreadPct_back",
    "spread_cal",
    "spreadPct_cal",
    "calCost",
    "calCostPct",
    "calGapPct",
    "undPricePctDiff",
];

/// Runs [`calculate_spreads`] and then [`calendar_calculations_with`].
pub fn screen(table: &QuoteTable, config: &CalendarConfig) -> EmporiumResult<QuoteTable> {
    let spreads = calculate_spreads(table)?;
    calendar_calculations_with(&spreads, config)
}

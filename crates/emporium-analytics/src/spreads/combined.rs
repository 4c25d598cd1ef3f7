//! Front, back and calendar spreads in one pass.

use emporium_core::{EmporiumResult, QuoteTable};

use super::calendar::calculate_cal_spread;
use super::leg::{calculate_fb_spread, Leg};

/// Applies the front leg, back leg and calendar spread calculations in order.
///
/// The first step to fail stops the pass and its error is returned as is.
pub fn calculate_spreads(table: &QuoteTable) -> EmporiumResult<QuoteTable> {
    let mut out = table.clone();
    for leg in Leg::ALL {
        out = calculate_fb_spread(&out, leg)?;
    }
    calculate_cal_spread(&out)
}

//! Column names consumed and produced by the transforms.

/// Front leg ask.
pub const ASK_FRONT: &str = "ask_front";
/// Front leg bid.
pub const BID_FRONT: &str = "bid_front";
/// Front leg mark.
pub const MARK_FRONT: &str = "mark_front";
/// Back leg ask.
pub const ASK_BACK: &str = "ask_back";
/// Back leg bid.
pub const BID_BACK: &str = "bid_back";
/// Back leg mark.
pub const MARK_BACK: &str = "mark_back";

/// Synthetic calendar ask.
pub const ASK_CAL: &str = "ask_cal";
/// Synthetic calendar bid.
pub const BID_CAL: &str = "bid_cal";
/// Synthetic calendar mark.
pub const MARK_CAL: &str = "mark_cal";
/// Calendar bid-ask width.
pub const SPREAD_CAL: &str = "spread_cal";
/// Calendar width over mark.
pub const SPREAD_PCT_CAL: &str = "spreadPct_cal";

/// Strike price.
pub const STRIKE: &str = "strike";
/// Strike expressed relative to a reference level.
pub const STRIKE_RELATIVE: &str = "strike_relative";
/// Underlying price.
pub const UNDERLYING: &str = "underlying";

/// Back mark minus front mark.
pub const CAL_COST: &str = "calCost";
/// Calendar cost over front mark.
pub const CAL_COST_PCT: &str = "calCostPct";
/// Strike minus underlying, over underlying.
pub const CAL_GAP_PCT: &str = "calGapPct";
/// Underlying minus strike, over strike.
pub const UND_PRICE_PCT_DIFF: &str = "undPricePctDiff";

/// The four leg quotes a synthetic calendar quote is derived from.
pub const LEG_QUOTES: [&str; 4] = [ASK_FRONT, BID_FRONT, ASK_BACK, BID_BACK];

/// The synthetic calendar quote.
pub const CALENDAR_QUOTE: [&str; 3] = [ASK_CAL, BID_CAL, MARK_CAL];

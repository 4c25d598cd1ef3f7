//! Bid-ask spread for a single expiration leg.
//!
//! ```text
//! spread_<leg>    = ask - bid
//! spreadPct_<leg> = (ask - bid) / ((ask + bid) / 2)
//! ```

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use emporium_core::precision::{fc32, ratio};
use emporium_core::validation::required_column_check;
use emporium_core::{EmporiumError, EmporiumResult, QuoteTable};

use crate::columns::{ASK_BACK, ASK_FRONT, BID_BACK, BID_FRONT, MARK_BACK, MARK_FRONT};

/// One side of a calendar spread.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Leg {
    /// Near expiration.
    Front,
    /// Far expiration.
    Back,
}

impl Leg {
    /// Both legs, front first.
    pub const ALL: [Leg; 2] = [Leg::Front, Leg::Back];

    /// Selector string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }

    /// Ask column of this leg.
    pub fn ask_column(self) -> &'static str {
        match self {
            Self::Front => ASK_FRONT,
            Self::Back => ASK_BACK,
        }
    }

    /// Bid column of this leg.
    pub fn bid_column(self) -> &'static str {
        match self {
            Self::Front => BID_FRONT,
            Self::Back => BID_BACK,
        }
    }

    /// Mark column of this leg.
    pub fn mark_column(self) -> &'static str {
        match self {
            Self::Front => MARK_FRONT,
            Self::Back => MARK_BACK,
        }
    }

    /// Output column for the bid-ask width.
    pub fn spread_column(self) -> &'static str {
        match self {
            Self::Front => "spread_front",
            Self::Back => "spread_back",
        }
    }

    /// Output column for the width over mid.
    pub fn spread_pct_column(self) -> &'static str {
        match self {
            Self::Front => "spreadPct_front",
            Self::Back => "spreadPct_back",
        }
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Leg {
    type Err = EmporiumError;

    fn from_str(s: &str) -> EmporiumResult<Self> {
        match s {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            other => Err(EmporiumError::invalid_argument(
                "leg",
                other,
                "expected 'front' or 'back'",
            )),
        }
    }
}

impl TryFrom<&str> for Leg {
    type Error = EmporiumError;

    fn try_from(s: &str) -> EmporiumResult<Self> {
        s.parse()
    }
}

/// Adds `spread_<leg>` and `spreadPct_<leg>` for one leg.
///
/// `leg` is a [`Leg`] or a selector string. An unknown selector fails with
/// [`EmporiumError::InvalidArgument`] before any column is inspected; absent
/// quote columns fail with [`EmporiumError::MissingColumn`].
///
/// A zero midpoint yields NaN in `spreadPct_<leg>` for that row.
///
/// # Example
///
/// ```rust
/// use emporium_analytics::spreads::{calculate_fb_spread, Leg};
/// use emporium_core::QuoteTable;
///
/// let quotes = QuoteTable::from_columns([
///     ("ask_front", vec![55.0]),
///     ("bid_front", vec![45.0]),
/// ])?;
/// let out = calculate_fb_spread(&quotes, Leg::Front)?;
/// let pct = out.column("spreadPct_front").and_then(|c| c.as_f32()).unwrap();
/// assert_eq!(pct[0], 0.2);
///
/// assert!(calculate_fb_spread(&quotes, "sideways").unwrap_err().is_invalid_argument());
/// # Ok::<(), emporium_core::EmporiumError>(())
/// ```
pub fn calculate_fb_spread<L>(table: &QuoteTable, leg: L) -> EmporiumResult<QuoteTable>
where
    L: TryInto<Leg>,
    EmporiumError: From<L::Error>,
{
    let leg: Leg = leg.try_into()?;
    required_column_check(table, &[leg.ask_column(), leg.bid_column()])?;

    let ask = table.values_f64(leg.ask_column())?;
    let bid = table.values_f64(leg.bid_column())?;

    let spread = &ask - &bid;
    let mid = (&ask + &bid) / 2.0;
    let spread_pct = ratio(&spread, &mid);

    let undefined = spread_pct.iter().filter(|v| v.is_nan()).count();
    debug!(
        "{} leg spread over {} rows ({} undefined pct)",
        leg,
        table.n_rows(),
        undefined
    );

    let mut out = table.clone();
    out.insert_column(leg.spread_column(), fc32(&spread))?;
    out.insert_column(leg.spread_pct_column(), fc32(&spread_pct))?;
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use emporium_core::DType;

    fn quotes() -> QuoteTable {
        QuoteTable::from_columns([
            ("ask_front", vec![55.0, 160.0, 0.0, 5.0]),
            ("bid_front", vec![45.0, 140.0, 0.0, -5.0]),
            ("ask_back", vec![105.0, 210.0, 1.0, 2.0]),
            ("bid_back", vec![95.0, 190.0, 1.0, 1.0]),
        ])
        .unwrap()
    }

    fn f32_column<'a>(table: &'a QuoteTable, name: &str) -> &'a ndarray::Array1<f32> {
        table.column(name).and_then(|c| c.as_f32()).unwrap()
    }

    #[test]
    fn test_front_leg() {
        let out = calculate_fb_spread(&quotes(), Leg::Front).unwrap();
        let spread = f32_column(&out, "spread_front");
        let pct = f32_column(&out, "spreadPct_front");

        assert_eq!(spread[0], 10.0);
        assert_eq!(pct[0], 0.2);
        assert_eq!(spread[1], 20.0);
        assert_relative_eq!(pct[1], 20.0 / 150.0, epsilon = 1e-5);
        assert_eq!(out.dtype("spread_front"), Some(DType::Float32));
        assert_eq!(out.dtype("spreadPct_front"), Some(DType::Float32));
    }

    #[test]
    fn test_zero_midpoint_is_nan() {
        let out = calculate_fb_spread(&quotes(), "front").unwrap();
        let spread = f32_column(&out, "spread_front");
        let pct = f32_column(&out, "spreadPct_front");

        // 0/0 and 10/0 both land on NaN rather than infinity
        assert!(pct[2].is_nan());
        assert!(pct[3].is_nan());
        assert_eq!(spread[2], 0.0);
        assert_eq!(spread[3], 10.0);
        assert_eq!(pct.iter().filter(|v| v.is_nan()).count(), 2);
    }

    #[test]
    fn test_back_leg_leaves_front_alone() {
        let input = quotes();
        let out = calculate_fb_spread(&input, Leg::Back).unwrap();
        assert!(out.has_column("spread_back"));
        assert!(!out.has_column("spread_front"));
        assert_eq!(out.column("ask_front"), input.column("ask_front"));
        assert!(!input.has_column("spread_back"));
    }

    #[test]
    fn test_invalid_leg_is_invalid_argument() {
        let err = calculate_fb_spread(&quotes(), "invalid_leg").unwrap_err();
        assert!(err.is_invalid_argument());

        // selector is checked before columns
        let err = calculate_fb_spread(&QuoteTable::new(), "invalid_leg").unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_missing_columns() {
        let table = QuoteTable::from_columns([("ask_front", vec![55.0])]).unwrap();
        let err = calculate_fb_spread(&table, Leg::Front).unwrap_err();
        assert_eq!(
            err,
            EmporiumError::MissingColumn {
                column: "bid_front".into(),
                missing: vec!["bid_front".into()],
            }
        );
    }

    #[test]
    fn test_idempotent() {
        let once = calculate_fb_spread(&quotes(), Leg::Front).unwrap();
        let twice = calculate_fb_spread(&once, Leg::Front).unwrap();
        assert_eq!(twice.n_columns(), once.n_columns());
        assert_eq!(
            f32_column(&once, "spread_front"),
            f32_column(&twice, "spread_front")
        );
        let a = f32_column(&once, "spreadPct_front");
        let b = f32_column(&twice, "spreadPct_front");
        for (x, y) in a.iter().zip(b.iter()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }

    #[test]
    fn test_leg_parsing() {
        assert_eq!(Leg::try_from("back").unwrap(), Leg::Back);
        assert_eq!(Leg::Front.to_string(), "front");
        assert_eq!(Leg::ALL.map(Leg::mark_column), ["mark_front", "mark_back"]);
    }
}

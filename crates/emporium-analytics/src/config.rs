//! Calendar calculation settings.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use emporium_core::{EmporiumError, EmporiumResult};

use crate::columns::{STRIKE, STRIKE_RELATIVE};

/// Which column supplies the strike reference for calendar gap metrics.
///
/// `strike` is canonical. `strike_relative` is only read when selected here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrikeColumn {
    /// The `strike` column.
    #[default]
    Strike,
    /// The `strike_relative` column.
    StrikeRelative,
}

impl StrikeColumn {
    /// Name of the column read.
    pub fn column_name(self) -> &'static str {
        match self {
            Self::Strike => STRIKE,
            Self::StrikeRelative => STRIKE_RELATIVE,
        }
    }
}

impl fmt::Display for StrikeColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

impl FromStr for StrikeColumn {
    type Err = EmporiumError;

    fn from_str(s: &str) -> EmporiumResult<Self> {
        match s {
            STRIKE => Ok(Self::Strike),
            STRIKE_RELATIVE => Ok(Self::StrikeRelative),
            other => Err(EmporiumError::invalid_argument(
                "strike_column",
                other,
                "expected 'strike' or 'strike_relative'",
            )),
        }
    }
}

/// Settings for [`calendar_calculations_with`](crate::cost::calendar_calculations_with).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// Strike reference column.
    pub strike_column: StrikeColumn,
}

impl CalendarConfig {
    /// Creates the default configuration (`strike`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the strike reference column.
    #[must_use]
    pub fn with_strike_column(mut self, strike_column: StrikeColumn) -> Self {
        self.strike_column = strike_column;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strike() {
        assert_eq!(CalendarConfig::new().strike_column, StrikeColumn::Strike);
        assert_eq!(StrikeColumn::default().column_name(), "strike");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "strike_relative".parse::<StrikeColumn>().unwrap(),
            StrikeColumn::StrikeRelative
        );
        assert!("moneyness"
            .parse::<StrikeColumn>()
            .unwrap_err()
            .is_invalid_argument());
    }

    #[test]
    fn test_toml() {
        let config: CalendarConfig = toml::from_str("strike_column = \"strike_relative\"").unwrap();
        assert_eq!(config.strike_column, StrikeColumn::StrikeRelative);

        let empty: CalendarConfig = toml::from_str("").unwrap();
        assert_eq!(empty, CalendarConfig::default());
    }

    #[test]
    fn test_json() {
        let json = serde_json::to_string(&CalendarConfig::new()).unwrap();
        assert_eq!(json, r#"{"strike_column":"strike"}"#);
    }
}

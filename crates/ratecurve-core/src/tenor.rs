//! Tenor label parsing.
//!
//! Tenors are converted to day offsets with fixed multipliers: a year is
//! 365 days, a month is 30 days and a week is 7 days. No calendar is
//! consulted, so "6M" is always 180 days regardless of the valuation date.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Unit suffix of a tenor label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Literal days (an explicit `D` suffix or no recognized suffix).
    Days,
    /// Weeks (`W`), 7 days each.
    Weeks,
    /// Months (`M`), 30 days each.
    Months,
    /// Years (`Y`), 365 days each.
    Years,
}

impl TenorUnit {
    /// Number of days in one unit.
    #[must_use]
    pub const fn days(self) -> u32 {
        match self {
            Self::Days => 1,
            Self::Weeks => 7,
            Self::Months => 30,
            Self::Years => 365,
        }
    }

    fn from_suffix(suffix: &str) -> Self {
        match suffix.chars().next().map(|c| c.to_ascii_uppercase()) {
            Some('Y') => Self::Years,
            Some('M') => Self::Months,
            Some('W') => Self::Weeks,
            _ => Self::Days,
        }
    }
}

impl fmt::Display for TenorUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Days => "D",
            Self::Weeks => "W",
            Self::Months => "M",
            Self::Years => "Y",
        };
        write!(f, "{s}")
    }
}

/// Splits a tenor label into its leading count and unit.
///
/// # Errors
///
/// Returns `CoreError::InvalidTenor` if the label does not start with an
/// integer, or the integer does not fit a day count.
pub fn parse_tenor(tenor: &str) -> CoreResult<(u32, TenorUnit)> {
    let trimmed = tenor.trim();
    let digits_end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());

    if digits_end == 0 {
        return Err(CoreError::invalid_tenor(tenor));
    }

    let count: u32 = trimmed[..digits_end]
        .parse()
        .map_err(|_| CoreError::invalid_tenor(tenor))?;
    let unit = TenorUnit::from_suffix(trimmed[digits_end..].trim_start());

    Ok((count, unit))
}

/// Converts a tenor label to a day offset.
///
/// `"1Y"` is 365 days, `"6M"` is 180, `"1W"` is 7, and a bare number such
/// as `"10"` is taken as a literal day count.
///
/// # Errors
///
/// Returns `CoreError::InvalidTenor` if no leading integer is present.
///
/// # Example
///
/// ```rust
/// use ratecurve_core::tenor_to_days;
///
/// assert_eq!(tenor_to_days("1Y").unwrap(), 365);
/// assert_eq!(tenor_to_days("2W").unwrap(), 14);
/// assert!(tenor_to_days("ABC").is_err());
/// ```
pub fn tenor_to_days(tenor: &str) -> CoreResult<u32> {
    let (count, unit) = parse_tenor(tenor)?;
    count
        .checked_mul(unit.days())
        .ok_or_else(|| CoreError::invalid_tenor(tenor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standard_tenors() {
        assert_eq!(tenor_to_days("1Y").unwrap(), 365);
        assert_eq!(tenor_to_days("6M").unwrap(), 180);
        assert_eq!(tenor_to_days("1W").unwrap(), 7);
        assert_eq!(tenor_to_days("10Y").unwrap(), 3650);
        assert_eq!(tenor_to_days("3M").unwrap(), 90);
    }

    #[test]
    fn test_literal_days() {
        assert_eq!(tenor_to_days("45").unwrap(), 45);
        assert_eq!(tenor_to_days("5D").unwrap(), 5);
        assert_eq!(tenor_to_days("0").unwrap(), 0);
    }

    #[test]
    fn test_lowercase_and_whitespace() {
        assert_eq!(tenor_to_days(" 2y ").unwrap(), 730);
        assert_eq!(tenor_to_days("18m").unwrap(), 540);
        assert_eq!(tenor_to_days("3 W").unwrap(), 21);
    }

    #[test]
    fn test_invalid_tenor() {
        assert_eq!(
            tenor_to_days("ABC"),
            Err(CoreError::invalid_tenor("ABC"))
        );
        assert!(tenor_to_days("").is_err());
        assert!(tenor_to_days("Y1").is_err());
        assert!(tenor_to_days("99999999999Y").is_err());
    }

    #[test]
    fn test_parse_tenor_unit() {
        assert_eq!(parse_tenor("5Y").unwrap(), (5, TenorUnit::Years));
        assert_eq!(parse_tenor("7").unwrap(), (7, TenorUnit::Days));
        assert_eq!(TenorUnit::Months.to_string(), "M");
    }

    proptest! {
        #[test]
        fn prop_tenor_unit_multipliers(n in 0u32..1000) {
            prop_assert_eq!(tenor_to_days(&format!("{n}Y")).unwrap(), n * 365);
            prop_assert_eq!(tenor_to_days(&format!("{n}M")).unwrap(), n * 30);
            prop_assert_eq!(tenor_to_days(&format!("{n}W")).unwrap(), n * 7);
            prop_assert_eq!(tenor_to_days(&format!("{n}D")).unwrap(), n);
            prop_assert_eq!(tenor_to_days(&n.to_string()).unwrap(), n);
            prop_assert_eq!(tenor_to_days(&format!("{n}y")).unwrap(), n * 365);
        }
    }
}

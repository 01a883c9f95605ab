//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Abbreviates a count in millions with one decimal place.
///
/// Usage in templates: `{{ view.analytics.total_revenue|millions }}` renders
/// `12500000` as `12.5M+`.
#[askama::filter_fn]
pub fn millions(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(abbreviate(&value.to_string(), 1_000_000, 1, "M+"))
}

/// Abbreviates a count in thousands with no decimal places.
///
/// Usage in templates: `{{ view.analytics.active_users|thousands }}` renders
/// `125000` as `125K+`.
#[askama::filter_fn]
pub fn thousands(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(abbreviate(&value.to_string(), 1_000, 0, "K+"))
}

/// Divide `raw` by `unit`, round half away from zero to `dp` places and
/// append `suffix`. Non-numeric input is returned unchanged.
fn abbreviate(raw: &str, unit: i64, dp: u32, suffix: &str) -> String {
    let Ok(value) = Decimal::from_str(raw) else {
        return raw.to_string();
    };
    let scaled = (value / Decimal::from(unit))
        .round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{scaled:.prec$}{suffix}", prec = dp as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abbreviate_millions() {
        assert_eq!(abbreviate("12500000", 1_000_000, 1, "M+"), "12.5M+");
        assert_eq!(abbreviate("3000000", 1_000_000, 1, "M+"), "3.0M+");
        assert_eq!(abbreviate("1250000", 1_000_000, 1, "M+"), "1.3M+");
    }

    #[test]
    fn test_abbreviate_thousands() {
        assert_eq!(abbreviate("125000", 1_000, 0, "K+"), "125K+");
        assert_eq!(abbreviate("1500", 1_000, 0, "K+"), "2K+");
        assert_eq!(abbreviate("999", 1_000, 0, "K+"), "1K+");
    }

    #[test]
    fn test_abbreviate_passes_through_text() {
        assert_eq!(abbreviate("n/a", 1_000, 0, "K+"), "n/a");
    }
}

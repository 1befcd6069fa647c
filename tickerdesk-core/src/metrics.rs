//! Display formatting and period-over-period arithmetic for dashboard metrics.
//!
//! Every function here is pure. Missing or unusable inputs degrade to `"N/A"`
//! or `None`; nothing in this module returns an error.

use crate::types::FinancialSeries;

const UNITS: [&str; 5] = ["", "K", "M", "B", "T"];
const OVERFLOW_UNIT: &str = "P";

/// Scale a magnitude into a one-decimal string with a K/M/B/T/P suffix.
///
/// `None` and non-finite values render as `"N/A"`. The sign is preserved.
/// Values still at or above 1000 after the `T` step are expressed in `P`.
///
/// ```
/// use tickerdesk_core::format_magnitude;
/// assert_eq!(format_magnitude(Some(1_234_567_890.0)), "1.2B");
/// assert_eq!(format_magnitude(Some(-1_500.0)), "-1.5K");
/// assert_eq!(format_magnitude(None), "N/A");
/// ```
#[must_use]
pub fn format_magnitude(value: Option<f64>) -> String {
    let Some(mut v) = value.filter(|v| v.is_finite()) else {
        return "N/A".to_string();
    };
    for unit in UNITS {
        if v.abs() < 1000.0 {
            return format!("{v:.1}{unit}");
        }
        v /= 1000.0;
    }
    format!("{v:.1}{OVERFLOW_UNIT}")
}

/// Percent change between the latest period and the one `periods` back.
///
/// `series` is ordered most-recent-first. Returns `None` when either value is
/// missing, the older value is zero, or the result is not finite.
#[must_use]
pub fn percent_change(series: &FinancialSeries, periods: usize) -> Option<f64> {
    let current = series.value_at(0)?;
    let previous = series.value_at(periods)?;
    if previous == 0.0 {
        return None;
    }
    let pct = (current - previous) / previous * 100.0;
    pct.is_finite().then_some(pct)
}

/// Render a percent with two decimals, or `"N/A"`.
#[must_use]
pub fn format_percent(percent: Option<f64>) -> String {
    percent
        .filter(|p| p.is_finite())
        .map_or_else(|| "N/A".to_string(), |p| format!("{p:.2}%"))
}

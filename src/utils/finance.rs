//! Price-change arithmetic for quote snapshots.
//!
//! ISS publishes zero in price fields for securities that have not traded
//! yet, so a zero reading is treated the same as a missing one when picking
//! fallbacks and computing changes.

/// Returns the value only if it is present and nonzero.
pub fn non_zero(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0)
}

/// Picks the primary price, falling back to the alternative when the
/// primary is missing or zero.
pub fn resolve_price(primary: Option<f64>, fallback: Option<f64>) -> Option<f64> {
    non_zero(primary).or(fallback)
}

/// Absolute change between the last and previous price.
///
/// # Returns
/// `last - prev` when both prices are present and nonzero, 0 otherwise.
pub fn price_change(last: Option<f64>, prev: Option<f64>) -> f64 {
    match (non_zero(last), non_zero(prev)) {
        (Some(last), Some(prev)) => last - prev,
        _ => 0.0,
    }
}

/// Relative change between the last and previous price, in percent,
/// rounded to two decimals.
///
/// # Returns
/// `(last - prev) / prev * 100` when both prices are present and nonzero,
/// 0 otherwise. A zero previous price never reaches the division.
pub fn percent_change(last: Option<f64>, prev: Option<f64>) -> f64 {
    match (non_zero(last), non_zero(prev)) {
        (Some(last), Some(prev)) => round2((last - prev) / prev * 100.0),
        _ => 0.0,
    }
}

/// Rounds a value to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

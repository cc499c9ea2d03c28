//! Whole-number percent convention.
//!
//! Rate inputs are quoted as whole percentages: `5.0` means 5%, and
//! `7.5` means 7.5%.

/// Converts a whole-number percentage into a decimal fraction.
#[inline]
#[must_use]
pub fn from_percent(rate: f64) -> f64 {
    rate / 100.0
}

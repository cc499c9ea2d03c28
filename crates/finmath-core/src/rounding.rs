//! Per-formula output rounding policies.
//!
//! Each formula declares exactly one [`Rounding`]. The conventions differ
//! (two-decimal round, three-decimal ceiling, percent scaling, none) and are
//! kept as distinct variants so that no formula silently inherits another's
//! behaviour.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a formula result is rounded before it is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Rounding {
    /// Full floating-point precision.
    Unrounded,
    /// Round half away from zero to `decimals` places.
    Nearest {
        /// Decimal places kept.
        decimals: u32,
    },
    /// Round toward positive infinity at `decimals` places.
    Ceil {
        /// Decimal places kept.
        decimals: u32,
    },
    /// Convert a decimal fraction to percent, then round half away from
    /// zero to `decimals` places of percent.
    ///
    /// Computed as `round(value * 100 * 10^decimals) / 10^decimals` in a
    /// single scaling step.
    Percent {
        /// Decimal places of percent kept.
        decimals: u32,
    },
}

impl Rounding {
    /// Two decimal places, round half away from zero. The monetary default.
    pub const CENTS: Rounding = Rounding::Nearest { decimals: 2 };

    /// Nearest whole number.
    pub const WHOLE: Rounding = Rounding::Nearest { decimals: 0 };

    /// Applies this policy to `value`.
    ///
    /// Non-finite values pass through unchanged.
    #[must_use]
    pub fn apply(&self, value: f64) -> f64 {
        match *self {
            Rounding::Unrounded => value,
            Rounding::Nearest { decimals } => {
                let factor = scale(decimals);
                (value * factor).round() / factor
            }
            Rounding::Ceil { decimals } => {
                let factor = scale(decimals);
                (value * factor).ceil() / factor
            }
            Rounding::Percent { decimals } => {
                let factor = scale(decimals);
                (value * (100.0 * factor)).round() / factor
            }
        }
    }

    /// Returns true if this policy leaves values untouched.
    #[must_use]
    pub fn is_unrounded(&self) -> bool {
        matches!(self, Rounding::Unrounded)
    }
}

impl Default for Rounding {
    fn default() -> Self {
        Rounding::Unrounded
    }
}

impl fmt::Display for Rounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rounding::Unrounded => write!(f, "unrounded"),
            Rounding::Nearest { decimals } => write!(f, "nearest, {decimals} dp"),
            Rounding::Ceil { decimals } => write!(f, "ceiling, {decimals} dp"),
            Rounding::Percent { decimals } => write!(f, "percent, {decimals} dp"),
        }
    }
}

fn scale(decimals: u32) -> f64 {
    10f64.powi(decimals as i32)
}

//! Payment frequency selector for amortization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FinanceError, FinanceResult};

/// Unit in which an amortization term is expressed.
///
/// Interest always accrues monthly; the variant only decides how the
/// `period` argument is converted into a number of monthly accruals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentType {
    /// Term given in years (12 accruals per unit).
    Years,
    /// Term given in months (1 accrual per unit).
    Months,
}

impl PaymentType {
    /// Returns the number of monthly accruals per unit of term.
    #[must_use]
    pub fn accruals_per_unit(&self) -> f64 {
        match self {
            PaymentType::Years => 12.0,
            PaymentType::Months => 1.0,
        }
    }

    /// Converts a term expressed in this unit into monthly accruals.
    #[must_use]
    pub fn accruals(&self, period: f64) -> f64 {
        period * self.accruals_per_unit()
    }

    /// Returns the lowercase name used by `FromStr` and serde.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentType::Years => "years",
            PaymentType::Months => "months",
        }
    }
}

impl fmt::Display for PaymentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PaymentType::Years => "Years",
            PaymentType::Months => "Months",
        };
        write!(f, "{name}")
    }
}

impl FromStr for PaymentType {
    type Err = FinanceError;

    fn from_str(s: &str) -> FinanceResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "years" | "year" | "y" => Ok(PaymentType::Years),
            "months" | "month" | "m" => Ok(PaymentType::Months),
            _ => {
                log::debug!("rejected payment type {s:?}");
                Err(FinanceError::invalid_payment_type(s))
            }
        }
    }
}

/// Discriminants follow declaration order: `0 = Years`, `1 = Months`.
impl TryFrom<u8> for PaymentType {
    type Error = FinanceError;

    fn try_from(value: u8) -> FinanceResult<Self> {
        match value {
            0 => Ok(PaymentType::Years),
            1 => Ok(PaymentType::Months),
            other => Err(FinanceError::invalid_payment_type(other.to_string())),
        }
    }
}

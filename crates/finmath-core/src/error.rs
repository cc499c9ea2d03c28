//! Error types for the finmath library.
//!
//! The formulas themselves return plain `f64` and let IEEE-754 carry
//! degenerate results (infinity, NaN). Errors only arise at the edges:
//! constructing a [`PaymentType`](crate::types::PaymentType) from untyped
//! input, or rejecting a non-finite result via [`ensure_finite`](crate::ensure_finite).

use thiserror::Error;

/// A specialized Result type for finmath operations.
pub type FinanceResult<T> = Result<T, FinanceError>;

/// The main error type for finmath operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// Payment type outside the closed `{Years, Months}` set.
    #[error("Invalid payment type: {value} (expected one of: years, months)")]
    InvalidPaymentType {
        /// The rejected input, as given.
        value: String,
    },

    /// A formula produced infinity or NaN.
    #[error("Non-finite result from {formula}: {value}")]
    NonFiniteResult {
        /// Name of the formula that produced the value.
        formula: String,
        /// The offending value.
        value: f64,
    },
}

impl FinanceError {
    /// Creates an invalid payment type error.
    #[must_use]
    pub fn invalid_payment_type(value: impl Into<String>) -> Self {
        Self::InvalidPaymentType {
            value: value.into(),
        }
    }

    /// Creates a non-finite result error.
    #[must_use]
    pub fn non_finite(formula: impl Into<String>, value: f64) -> Self {
        Self::NonFiniteResult {
            formula: formula.into(),
            value,
        }
    }
}

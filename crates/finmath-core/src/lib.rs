//! # Finmath Core
//!
//! Core types and conventions shared by the finmath formula library.
//!
//! This crate provides:
//!
//! - **Types**: [`PaymentType`], the closed `{Years, Months}` selector used by
//!   amortization, with validating constructors
//! - **Rounding**: [`Rounding`], the explicit per-formula output policy
//! - **Percent convention**: [`from_percent`] for whole-number rate inputs
//! - **Errors**: [`FinanceError`] and the [`ensure_finite`] boundary check
//!
//! ## Numeric policy
//!
//! Formulas return raw `f64` and propagate IEEE-754 semantics: a division by
//! zero yields infinity or NaN rather than an error. Callers that must not
//! surface such values (a CLI, a report) run results through
//! [`ensure_finite`].
//!
//! ## Example
//!
//! ```rust
//! use finmath_core::prelude::*;
//!
//! let unit: PaymentType = "months".parse().unwrap();
//! assert_eq!(unit.accruals(60.0), 60.0);
//!
//! assert_eq!(Rounding::CENTS.apply(95.238), 95.24);
//! assert!(ensure_finite("r72", 72.0 / 0.0).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::derivable_impls)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod error;
pub mod rounding;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::ensure_finite;
    pub use crate::error::{FinanceError, FinanceResult};
    pub use crate::rounding::Rounding;
    pub use crate::types::{from_percent, PaymentType};
}

// Re-export commonly used types at crate root
pub use error::{FinanceError, FinanceResult};
pub use rounding::Rounding;
pub use types::{from_percent, PaymentType};

/// Returns `value` unchanged if it is finite, otherwise a
/// [`FinanceError::NonFiniteResult`] naming `formula`.
pub fn ensure_finite(formula: &str, value: f64) -> FinanceResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        log::debug!("{formula} produced non-finite value {value}");
        Err(FinanceError::non_finite(formula, value))
    }
}

//! # Finmath Analytics
//!
//! Standalone financial formulas. Every function is pure: the result depends
//! only on the arguments, and identical arguments give bit-identical
//! results.
//!
//! - **Time value of money** ([`tvm`]): PV, FV, CI, PMT, AM
//! - **Cash flows** ([`cashflows`]): NPV, PI, PP, DF
//! - **Returns** ([`returns`]): ROI, CAGR, IAR, R72
//! - **Corporate finance** ([`corporate`]): WACC, CAPM, StockPV, LR
//!
//! Rates are whole-number percentages (`7.5` means 7.5%) unless a function
//! says otherwise. Each formula rounds its output according to the policy
//! recorded in [`catalog`]. Degenerate inputs (zero denominators and the
//! like) are not validated and produce IEEE-754 infinities or NaN; use
//! [`finmath_core::ensure_finite`] where such values must be rejected.
//!
//! ## Example
//!
//! ```rust
//! use finmath_analytics::prelude::*;
//!
//! assert_eq!(present_value(5.0, 100.0, 5.0), 78.35);
//! assert_eq!(
//!     amortization(20_000.0, 7.5, 60.0, PaymentType::Months, true),
//!     398.27
//! );
//! assert_eq!(discount_factors(10.0, 3), vec![1.0, 0.91]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::float_cmp)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod cashflows;
pub mod catalog;
pub mod corporate;
pub mod returns;
pub mod tvm;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::cashflows::{
        discount_factors, net_present_value, payback_period, profitability_index,
    };
    pub use crate::catalog::Formula;
    pub use crate::corporate::{
        capital_asset_pricing_model, leverage_ratio, stock_present_value,
        weighted_average_cost_of_capital,
    };
    pub use crate::returns::{
        compound_annual_growth_rate, inflation_adjusted_return, return_on_investment, rule_of_72,
    };
    pub use crate::tvm::{
        amortization, compound_interest, future_value, payment, present_value,
    };
    pub use finmath_core::{ensure_finite, FinanceError, FinanceResult, PaymentType, Rounding};
}

pub use catalog::Formula;

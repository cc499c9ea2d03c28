//! Time value of money: present/future value, compounding, annuity
//! payments and amortization.
//!
//! All `rate` arguments are whole-number percentages (`5.0` is 5%).

use finmath_core::{from_percent, PaymentType};

use crate::catalog::Formula;

/// Present Value (PV).
///
/// The current worth of a future sum of money given a rate of return:
///
/// ```text
/// PV = cash_flow / (1 + r)^period
/// ```
///
/// Rounded to 2 decimals.
///
/// # Example
///
/// ```rust
/// use finmath_analytics::tvm::present_value;
///
/// assert_eq!(present_value(5.0, 100.0, 1.0), 95.24);
/// ```
#[must_use]
pub fn present_value(rate: f64, cash_flow: f64, period: f64) -> f64 {
    let r = from_percent(rate);
    let pv = cash_flow / (1.0 + r).powf(period);
    Formula::PresentValue.rounding().apply(pv)
}

/// Future Value (FV).
///
/// The value at a future date of a sum held today:
///
/// ```text
/// FV = cash_flow * (1 + r)^period
/// ```
///
/// Rounded to 2 decimals.
#[must_use]
pub fn future_value(rate: f64, cash_flow: f64, period: f64) -> f64 {
    let r = from_percent(rate);
    let fv = cash_flow * (1.0 + r).powf(period);
    Formula::FutureValue.rounding().apply(fv)
}

/// Compound Interest (CI).
///
/// Final balance of `principal` compounded `num_of_compoundings` times per
/// period over `num_of_periods` periods. Rounded to 2 decimals.
#[must_use]
pub fn compound_interest(
    rate: f64,
    num_of_compoundings: f64,
    principal: f64,
    num_of_periods: f64,
) -> f64 {
    let periodic = from_percent(rate) / num_of_compoundings;
    let ci = principal * (1.0 + periodic).powf(num_of_compoundings * num_of_periods);
    Formula::CompoundInterest.rounding().apply(ci)
}

/// Annuity payment (PMT).
///
/// The level amount paid each period to retire `principal` over
/// `num_of_payments` periods:
///
/// ```text
/// PMT = -(principal * r) / (1 - (1 + r)^-n)
/// ```
///
/// The sign is flipped relative to `principal`: a borrowed amount given as
/// a negative principal yields a positive payment. Rounded to 2 decimals.
#[must_use]
pub fn payment(rate: f64, num_of_payments: f64, principal: f64) -> f64 {
    let r = from_percent(rate);
    let pmt = -(principal * r) / (1.0 - (1.0 + r).powf(-num_of_payments));
    Formula::Payment.rounding().apply(pmt)
}

/// Amortization (AM): the fixed monthly installment that retires
/// `principal` at an annual `rate`.
///
/// Interest accrues monthly (`r = rate / 12 / 100`). `period` is converted
/// to `N` monthly accruals according to `payment_type`, so `5` years and
/// `60` months describe the same schedule and produce the same payment.
///
/// ```text
/// AM = principal * r(1 + r)^K / ((1 + r)^N - 1)
/// ```
///
/// where `K = N - 1` when payments fall at the beginning of each period
/// (the first period accrues no interest) and `K = N` otherwise.
///
/// Rounded to 2 decimals.
///
/// # Example
///
/// ```rust
/// use finmath_analytics::tvm::amortization;
/// use finmath_core::PaymentType;
///
/// let yearly = amortization(20_000.0, 7.5, 5.0, PaymentType::Years, false);
/// let monthly = amortization(20_000.0, 7.5, 60.0, PaymentType::Months, false);
/// assert_eq!(yearly, 400.76);
/// assert_eq!(yearly, monthly);
/// ```
#[must_use]
pub fn amortization(
    principal: f64,
    rate: f64,
    period: f64,
    payment_type: PaymentType,
    pay_at_beginning: bool,
) -> f64 {
    let rate_per_period = rate / 12.0 / 100.0;
    let accruals = payment_type.accruals(period);

    let numerator = amortization_numerator(rate_per_period, accruals, pay_at_beginning);
    let denominator = (1.0 + rate_per_period).powf(accruals) - 1.0;

    let am = principal * (numerator / denominator);
    Formula::Amortization.rounding().apply(am)
}

/// `r(1 + r)^K`, with one fewer accrual when paying at the beginning.
fn amortization_numerator(rate_per_period: f64, accruals: f64, pay_at_beginning: bool) -> f64 {
    let accruals = if pay_at_beginning {
        accruals - 1.0
    } else {
        accruals
    };
    rate_per_period * (1.0 + rate_per_period).powf(accruals)
}

//! Return and growth measures.

use crate::catalog::Formula;

/// Return On Investment (ROI), in percent.
///
/// ```text
/// ROI = (earnings - |initial_investment|) / |initial_investment| * 100
/// ```
///
/// The investment may be given with either sign. Rounded to 2 decimals.
#[must_use]
pub fn return_on_investment(initial_investment: f64, earnings: f64) -> f64 {
    let invested = initial_investment.abs();
    let roi = (earnings - invested) / invested * 100.0;
    Formula::ReturnOnInvestment.rounding().apply(roi)
}

/// Compound Annual Growth Rate (CAGR), in percent.
///
/// ```text
/// CAGR = ((ending / beginning)^(1 / periods) - 1) * 100
/// ```
///
/// Rounded to 2 decimals of percent.
#[must_use]
pub fn compound_annual_growth_rate(
    beginning_value: f64,
    ending_value: f64,
    num_of_periods: f64,
) -> f64 {
    let cagr = (ending_value / beginning_value).powf(1.0 / num_of_periods) - 1.0;
    Formula::CompoundAnnualGrowthRate.rounding().apply(cagr)
}

/// Inflation-adjusted Return (IAR), in percent.
///
/// Both inputs are decimal fractions (`0.08` is 8%), unlike the
/// whole-percent rates used elsewhere. Unrounded.
#[must_use]
pub fn inflation_adjusted_return(investment_return: f64, inflation_rate: f64) -> f64 {
    100.0 * ((1.0 + investment_return) / (1.0 + inflation_rate) - 1.0)
}

/// Rule of 72 (R72): approximate periods needed to double money at `rate`
/// percent. Unrounded.
#[must_use]
pub fn rule_of_72(rate: f64) -> f64 {
    72.0 / rate
}

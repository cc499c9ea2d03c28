//! Corporate finance ratios: cost of capital, expected return, equity
//! valuation and leverage.

use crate::catalog::Formula;

/// Weighted Average Cost of Capital (WACC), in percent.
///
/// ```text
/// WACC = (E / V) * Re + (D / V) * Rd * (1 - T),  V = E + D
/// ```
///
/// `cost_of_equity`, `cost_of_debt` and `tax_rate` are whole percentages.
/// Rounded to 1 decimal of percent. With `E + D == 0` the result is NaN.
///
/// # Example
///
/// ```rust
/// use finmath_analytics::corporate::weighted_average_cost_of_capital;
///
/// let wacc = weighted_average_cost_of_capital(600_000.0, 400_000.0, 6.0, 5.0, 35.0);
/// assert_eq!(wacc, 4.9);
/// ```
#[must_use]
pub fn weighted_average_cost_of_capital(
    market_value_of_equity: f64,
    market_value_of_debt: f64,
    cost_of_equity: f64,
    cost_of_debt: f64,
    tax_rate: f64,
) -> f64 {
    let e = market_value_of_equity;
    let d = market_value_of_debt;
    let v = e + d;

    let equity_part = (e / v) * cost_of_equity / 100.0;
    let debt_part = ((d / v) * cost_of_debt / 100.0) * (1.0 - tax_rate / 100.0);

    Formula::WeightedAverageCostOfCapital
        .rounding()
        .apply(equity_part + debt_part)
}

/// Capital Asset Pricing Model (CAPM).
///
/// Takes whole-percent rates and returns the expected return as a decimal
/// fraction (`0.18` is 18%). Unrounded.
#[must_use]
pub fn capital_asset_pricing_model(
    risk_free_rate: f64,
    beta: f64,
    expected_market_return: f64,
) -> f64 {
    let rf = risk_free_rate / 100.0;
    rf + beta * (expected_market_return / 100.0 - rf)
}

/// Value of a stock whose dividend grows at a constant rate in perpetuity
/// (Gordon growth).
///
/// ```text
/// P = D0 * (1 + g) / (ke - g)
/// ```
///
/// Rounded to the nearest whole unit. The model is only meaningful for
/// `required_return > growth_rate`.
#[must_use]
pub fn stock_present_value(growth_rate: f64, required_return: f64, current_dividend: f64) -> f64 {
    let g = growth_rate / 100.0;
    let ke = required_return / 100.0;
    let value = (current_dividend * (1.0 + g)) / (ke - g);
    Formula::StockPresentValue.rounding().apply(value)
}

/// Leverage Ratio (LR): `(total_liabilities + total_debts) / total_income`.
/// Unrounded.
#[must_use]
pub fn leverage_ratio(total_liabilities: f64, total_debts: f64, total_income: f64) -> f64 {
    (total_liabilities + total_debts) / total_income
}

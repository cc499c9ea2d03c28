//! Multi-period cash-flow measures: NPV, profitability index, payback
//! period and discount factors.
//!
//! Cash-flow slices are in chronological order. Index `i` is received at the
//! end of period `i + 1`, i.e. one period after the initial investment, so
//! the first flow is discounted once.

use finmath_core::from_percent;

use crate::catalog::Formula;

/// Net Present Value (NPV).
///
/// ```text
/// NPV = initial_investment + sum(cash_flows[i] / (1 + r)^(i + 1))
/// ```
///
/// `initial_investment` is taken as-is (pass outflows as negatives).
/// Rounded to 2 decimals.
///
/// # Example
///
/// ```rust
/// use finmath_analytics::cashflows::net_present_value;
///
/// let npv = net_present_value(10.0, -500_000.0, &[200_000.0, 300_000.0, 200_000.0]);
/// assert_eq!(npv, 80_015.03);
/// ```
#[must_use]
pub fn net_present_value(rate: f64, initial_investment: f64, cash_flows: &[f64]) -> f64 {
    let growth = 1.0 + from_percent(rate);
    let npv = cash_flows
        .iter()
        .enumerate()
        .fold(initial_investment, |acc, (i, cf)| {
            acc + cf / growth.powf((i + 1) as f64)
        });
    Formula::NetPresentValue.rounding().apply(npv)
}

/// Profitability Index (PI).
///
/// Present value of `cash_flows` (first flow discounted once) divided by
/// the magnitude of `initial_investment`. Rounded to 2 decimals.
#[must_use]
pub fn profitability_index(rate: f64, initial_investment: f64, cash_flows: &[f64]) -> f64 {
    let growth = 1.0 + from_percent(rate);
    let total_of_pvs: f64 = cash_flows
        .iter()
        .enumerate()
        .map(|(i, cf)| {
            let discount_factor = 1.0 / growth.powf((i + 1) as f64);
            cf * discount_factor
        })
        .sum();

    let pi = total_of_pvs / initial_investment.abs();
    Formula::ProfitabilityIndex.rounding().apply(pi)
}

/// Payback Period (PP): the number of periods needed to recover
/// `initial_investment`.
///
/// With `number_of_periods == 0` the flows are treated as even and the
/// result is `|initial_investment / cash_flows[0]|`.
///
/// Otherwise the flows are uneven: the running total starts at
/// `initial_investment` (a negative outlay) and each period is added in
/// turn. Every period that leaves the total non-positive counts as one full
/// period; in the period where it turns positive the fractional remainder
/// `(total - cash_flow) / cash_flow` is added and accumulation stops. The
/// count starts at one. If the investment is never recovered the result is
/// `cash_flows.len() + 1`. Only the zero/non-zero distinction of
/// `number_of_periods` matters.
///
/// The result is unrounded.
///
/// # Panics
///
/// Panics if `number_of_periods == 0` and `cash_flows` is empty.
///
/// # Example
///
/// ```rust
/// use finmath_analytics::cashflows::payback_period;
///
/// assert_eq!(payback_period(0, -105.0, &[25.0]), 4.2);
/// assert_eq!(
///     payback_period(5, -50.0, &[10.0, 13.0, 16.0, 19.0, 22.0]),
///     3.4210526315789473
/// );
/// ```
#[must_use]
pub fn payback_period(number_of_periods: u32, initial_investment: f64, cash_flows: &[f64]) -> f64 {
    if number_of_periods == 0 {
        return (initial_investment / cash_flows[0]).abs();
    }

    let mut cumulative = initial_investment;
    let mut periods = 1.0;

    for &cash_flow in cash_flows {
        cumulative += cash_flow;

        if cumulative > 0.0 {
            periods += (cumulative - cash_flow) / cash_flow;
            return Formula::PaybackPeriod.rounding().apply(periods);
        }
        periods += 1.0;
    }

    log::debug!(
        "investment of {initial_investment} not recovered within {} periods",
        cash_flows.len()
    );
    Formula::PaybackPeriod.rounding().apply(periods)
}

/// Discount Factors (DF) for `num_of_periods - 1` consecutive periods.
///
/// Element `k` (zero-based) is `1 / (1 + r)^k`, so the first factor is
/// always `1`. Each factor is rounded *up* to 3 decimals. Returns an empty
/// vector when `num_of_periods <= 1`.
///
/// # Example
///
/// ```rust
/// use finmath_analytics::cashflows::discount_factors;
///
/// assert_eq!(discount_factors(10.0, 6), vec![1.0, 0.91, 0.827, 0.752, 0.684]);
/// ```
#[must_use]
pub fn discount_factors(rate: f64, num_of_periods: usize) -> Vec<f64> {
    let growth = 1.0 + from_percent(rate);
    let rounding = Formula::DiscountFactors.rounding();

    (1..num_of_periods)
        .map(|i| {
            let discount_factor = 1.0 / growth.powf((i - 1) as f64);
            rounding.apply(discount_factor)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_net_present_value() {
        assert_eq!(
            net_present_value(10.0, -500_000.0, &[200_000.0, 300_000.0, 200_000.0]),
            80_015.03
        );
    }

    #[test]
    fn test_net_present_value_discounts_first_flow_once() {
        // 110 received one period out at 10% is worth exactly 100 today
        assert_eq!(net_present_value(10.0, -100.0, &[110.0]), 0.0);
        assert_eq!(net_present_value(10.0, -100.0, &[]), -100.0);
    }

    #[test]
    fn test_profitability_index() {
        assert_eq!(
            profitability_index(
                10.0,
                -40_000.0,
                &[18_000.0, 12_000.0, 10_000.0, 9_000.0, 6_000.0]
            ),
            1.09
        );
    }

    #[test]
    fn test_profitability_index_ignores_investment_sign() {
        let flows = [18_000.0, 12_000.0, 10_000.0, 9_000.0, 6_000.0];
        assert_eq!(
            profitability_index(10.0, 40_000.0, &flows),
            profitability_index(10.0, -40_000.0, &flows)
        );
    }

    #[test]
    fn test_payback_period_even() {
        assert_eq!(payback_period(0, -105.0, &[25.0]), 4.2);
        // only the first flow is read
        assert_eq!(payback_period(0, -105.0, &[25.0, 1_000.0]), 4.2);
    }

    #[test]
    fn test_payback_period_uneven() {
        assert_eq!(
            payback_period(5, -50.0, &[10.0, 13.0, 16.0, 19.0, 22.0]),
            3.4210526315789473
        );
    }

    #[test]
    fn test_payback_period_first_period() {
        // recovered inside period one: 1 + (10 - 60) / 60
        assert_eq!(payback_period(1, -50.0, &[60.0]), 1.0 + (10.0 - 60.0) / 60.0);
    }

    #[test]
    fn test_payback_period_never_recovered() {
        assert_eq!(payback_period(3, -100.0, &[10.0, 10.0, 10.0]), 4.0);
        assert_eq!(payback_period(3, -100.0, &[]), 1.0);
    }

    #[test]
    fn test_payback_period_even_zero_flow_is_infinite() {
        assert_eq!(payback_period(0, -105.0, &[0.0]), f64::INFINITY);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn test_payback_period_even_requires_a_flow() {
        let _ = payback_period(0, -105.0, &[]);
    }

    #[test]
    fn test_discount_factors() {
        assert_eq!(
            discount_factors(10.0, 6),
            vec![1.0, 0.91, 0.827, 0.752, 0.684]
        );
    }

    #[test]
    fn test_discount_factors_length() {
        assert_eq!(discount_factors(10.0, 2), vec![1.0]);
        assert!(discount_factors(10.0, 1).is_empty());
        assert!(discount_factors(10.0, 0).is_empty());
        assert_eq!(discount_factors(0.0, 4), vec![1.0, 1.0, 1.0]);
    }
}

//! Corporate finance commands: WACC, CAPM, StockPV and LR.

use clap::Args;
use serde_json::json;

use finmath_analytics::corporate;
use finmath_analytics::Formula;

use super::{Evaluation, Input, ResultValue};
use crate::error::CliResult;

/// Arguments for the WACC command.
#[derive(Args, Debug)]
pub struct WaccArgs {
    /// Market value of equity
    #[arg(short, long)]
    pub equity: f64,

    /// Market value of debt
    #[arg(short, long)]
    pub debt: f64,

    /// Cost of equity (as percentage)
    #[arg(long, allow_negative_numbers = true)]
    pub cost_of_equity: f64,

    /// Cost of debt (as percentage)
    #[arg(long, allow_negative_numbers = true)]
    pub cost_of_debt: f64,

    /// Corporate tax rate (as percentage)
    #[arg(short, long)]
    pub tax_rate: f64,
}

/// Arguments for the CAPM command.
#[derive(Args, Debug)]
pub struct CapmArgs {
    /// Risk-free rate (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub risk_free_rate: f64,

    /// Asset beta
    #[arg(short, long, allow_negative_numbers = true)]
    pub beta: f64,

    /// Expected market return (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub market_return: f64,
}

/// Arguments for the stock value command.
#[derive(Args, Debug)]
pub struct StockValueArgs {
    /// Dividend growth rate (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub growth_rate: f64,

    /// Required return (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub required_return: f64,

    /// Current dividend
    #[arg(short, long)]
    pub dividend: f64,
}

/// Arguments for the leverage ratio command.
#[derive(Args, Debug)]
pub struct LeverageArgs {
    /// Total liabilities
    #[arg(short, long)]
    pub liabilities: f64,

    /// Total debts
    #[arg(short, long)]
    pub debts: f64,

    /// Total income
    #[arg(short, long, allow_negative_numbers = true)]
    pub income: f64,
}

/// Weighted average cost of capital.
pub fn weighted_average_cost_of_capital(args: &WaccArgs) -> CliResult<Evaluation> {
    let value = corporate::weighted_average_cost_of_capital(
        args.equity,
        args.debt,
        args.cost_of_equity,
        args.cost_of_debt,
        args.tax_rate,
    );
    Ok(Evaluation::new(
        Formula::WeightedAverageCostOfCapital,
        vec![
            Input::new("Equity", json!(args.equity)),
            Input::new("Debt", json!(args.debt)),
            Input::new("Cost of equity (%)", json!(args.cost_of_equity)),
            Input::new("Cost of debt (%)", json!(args.cost_of_debt)),
            Input::new("Tax rate (%)", json!(args.tax_rate)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Capital asset pricing model.
pub fn capital_asset_pricing_model(args: &CapmArgs) -> CliResult<Evaluation> {
    let value =
        corporate::capital_asset_pricing_model(args.risk_free_rate, args.beta, args.market_return);
    Ok(Evaluation::new(
        Formula::CapitalAssetPricingModel,
        vec![
            Input::new("Risk-free rate (%)", json!(args.risk_free_rate)),
            Input::new("Beta", json!(args.beta)),
            Input::new("Market return (%)", json!(args.market_return)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Stock value under constant dividend growth.
pub fn stock_present_value(args: &StockValueArgs) -> CliResult<Evaluation> {
    let value =
        corporate::stock_present_value(args.growth_rate, args.required_return, args.dividend);
    Ok(Evaluation::new(
        Formula::StockPresentValue,
        vec![
            Input::new("Growth rate (%)", json!(args.growth_rate)),
            Input::new("Required return (%)", json!(args.required_return)),
            Input::new("Dividend", json!(args.dividend)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Leverage ratio.
pub fn leverage_ratio(args: &LeverageArgs) -> CliResult<Evaluation> {
    let value = corporate::leverage_ratio(args.liabilities, args.debts, args.income);
    Ok(Evaluation::new(
        Formula::LeverageRatio,
        vec![
            Input::new("Liabilities", json!(args.liabilities)),
            Input::new("Debts", json!(args.debts)),
            Input::new("Income", json!(args.income)),
        ],
        ResultValue::Scalar(value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wacc_args(equity: f64, debt: f64) -> WaccArgs {
        WaccArgs {
            equity,
            debt,
            cost_of_equity: 6.0,
            cost_of_debt: 5.0,
            tax_rate: 35.0,
        }
    }

    #[test]
    fn test_wacc_evaluation() {
        let eval = weighted_average_cost_of_capital(&wacc_args(600_000.0, 400_000.0)).unwrap();
        assert_eq!(eval.result, ResultValue::Scalar(4.9));
        assert_eq!(eval.inputs[4].value, json!(35.0));
    }

    #[test]
    fn test_wacc_without_capital_is_not_finite() {
        let eval = weighted_average_cost_of_capital(&wacc_args(0.0, 0.0)).unwrap();
        assert!(eval.ensure_finite().is_err());
    }

    #[test]
    fn test_stock_and_leverage_evaluation() {
        let stock = stock_present_value(&StockValueArgs {
            growth_rate: 5.0,
            required_return: 15.0,
            dividend: 10.0,
        })
        .unwrap();
        assert_eq!(stock.result, ResultValue::Scalar(105.0));

        let lr = leverage_ratio(&LeverageArgs {
            liabilities: 25.0,
            debts: 10.0,
            income: 20.0,
        })
        .unwrap();
        assert_eq!(lr.result, ResultValue::Scalar(1.75));
    }
}

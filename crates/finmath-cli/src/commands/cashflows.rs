//! Cash-flow commands: NPV, PI, PP and DF.

use clap::Args;
use serde_json::json;

use finmath_analytics::cashflows;
use finmath_analytics::Formula;

use super::{require_cash_flows, Evaluation, Input, ResultValue};
use crate::error::CliResult;

/// Arguments for the NPV and profitability index commands.
#[derive(Args, Debug)]
pub struct CashFlowArgs {
    /// Discount rate per period (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Initial investment (negative for an outlay)
    #[arg(short, long, allow_negative_numbers = true)]
    pub initial_investment: f64,

    /// Cash flows per period, comma-separated (e.g., 200000,300000,200000)
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Vec<f64>,
}

impl CashFlowArgs {
    fn inputs(&self) -> Vec<Input> {
        vec![
            Input::new("Rate (%)", json!(self.rate)),
            Input::new("Initial investment", json!(self.initial_investment)),
            Input::new("Cash flows", json!(self.cash_flows)),
        ]
    }
}

/// Arguments for the payback period command.
#[derive(Args, Debug)]
pub struct PaybackArgs {
    /// Number of projected periods; 0 treats the first cash flow as an even flow
    #[arg(short = 'n', long, default_value = "0")]
    pub periods: u32,

    /// Initial investment (negative for an outlay)
    #[arg(short, long, allow_negative_numbers = true)]
    pub initial_investment: f64,

    /// Cash flows per period, comma-separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
    pub cash_flows: Vec<f64>,
}

/// Arguments for the discount factors command.
#[derive(Args, Debug)]
pub struct DiscountFactorArgs {
    /// Discount rate per period (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Number of periods; yields one factor fewer
    #[arg(short = 'n', long)]
    pub periods: usize,
}

/// Net present value.
pub fn net_present_value(args: &CashFlowArgs) -> CliResult<Evaluation> {
    let value = cashflows::net_present_value(args.rate, args.initial_investment, &args.cash_flows);
    Ok(Evaluation::new(
        Formula::NetPresentValue,
        args.inputs(),
        ResultValue::Scalar(value),
    ))
}

/// Profitability index.
pub fn profitability_index(args: &CashFlowArgs) -> CliResult<Evaluation> {
    let value =
        cashflows::profitability_index(args.rate, args.initial_investment, &args.cash_flows);
    Ok(Evaluation::new(
        Formula::ProfitabilityIndex,
        args.inputs(),
        ResultValue::Scalar(value),
    ))
}

/// Payback period.
pub fn payback_period(args: &PaybackArgs) -> CliResult<Evaluation> {
    // even flows read the first entry
    if args.periods == 0 {
        require_cash_flows("PP", &args.cash_flows)?;
    }
    let value = cashflows::payback_period(args.periods, args.initial_investment, &args.cash_flows);
    Ok(Evaluation::new(
        Formula::PaybackPeriod,
        vec![
            Input::new("Periods", json!(args.periods)),
            Input::new("Initial investment", json!(args.initial_investment)),
            Input::new("Cash flows", json!(args.cash_flows)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Discount factors.
pub fn discount_factors(args: &DiscountFactorArgs) -> CliResult<Evaluation> {
    let values = cashflows::discount_factors(args.rate, args.periods);
    Ok(Evaluation::new(
        Formula::DiscountFactors,
        vec![
            Input::new("Rate (%)", json!(args.rate)),
            Input::new("Periods", json!(args.periods)),
        ],
        ResultValue::Series(values),
    ))
}

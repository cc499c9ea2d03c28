//! Return commands: ROI, CAGR, IAR and R72.

use clap::Args;
use serde_json::json;

use finmath_analytics::returns;
use finmath_analytics::Formula;

use super::{Evaluation, Input, ResultValue};
use crate::error::CliResult;

/// Arguments for the ROI command.
#[derive(Args, Debug)]
pub struct RoiArgs {
    /// Initial investment (either sign)
    #[arg(short, long, allow_negative_numbers = true)]
    pub initial_investment: f64,

    /// Total earnings
    #[arg(short, long, allow_negative_numbers = true)]
    pub earnings: f64,
}

/// Arguments for the CAGR command.
#[derive(Args, Debug)]
pub struct CagrArgs {
    /// Beginning value
    #[arg(short, long, allow_negative_numbers = true)]
    pub beginning: f64,

    /// Ending value
    #[arg(short, long, allow_negative_numbers = true)]
    pub ending: f64,

    /// Number of periods
    #[arg(short = 'n', long)]
    pub periods: f64,
}

/// Arguments for the inflation-adjusted return command.
#[derive(Args, Debug)]
pub struct IarArgs {
    /// Investment return (as decimal fraction, e.g., 0.08 for 8%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub investment_return: f64,

    /// Inflation rate (as decimal fraction)
    #[arg(short = 'I', long, allow_negative_numbers = true)]
    pub inflation_rate: f64,
}

/// Arguments for the rule of 72 command.
#[derive(Args, Debug)]
pub struct Rule72Args {
    /// Rate per period (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,
}

/// Return on investment.
pub fn return_on_investment(args: &RoiArgs) -> CliResult<Evaluation> {
    let value = returns::return_on_investment(args.initial_investment, args.earnings);
    Ok(Evaluation::new(
        Formula::ReturnOnInvestment,
        vec![
            Input::new("Initial investment", json!(args.initial_investment)),
            Input::new("Earnings", json!(args.earnings)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Compound annual growth rate.
pub fn compound_annual_growth_rate(args: &CagrArgs) -> CliResult<Evaluation> {
    let value = returns::compound_annual_growth_rate(args.beginning, args.ending, args.periods);
    Ok(Evaluation::new(
        Formula::CompoundAnnualGrowthRate,
        vec![
            Input::new("Beginning value", json!(args.beginning)),
            Input::new("Ending value", json!(args.ending)),
            Input::new("Periods", json!(args.periods)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Inflation-adjusted return.
pub fn inflation_adjusted_return(args: &IarArgs) -> CliResult<Evaluation> {
    let value = returns::inflation_adjusted_return(args.investment_return, args.inflation_rate);
    Ok(Evaluation::new(
        Formula::InflationAdjustedReturn,
        vec![
            Input::new("Investment return", json!(args.investment_return)),
            Input::new("Inflation rate", json!(args.inflation_rate)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Rule of 72.
pub fn rule_of_72(args: &Rule72Args) -> CliResult<Evaluation> {
    Ok(Evaluation::new(
        Formula::RuleOf72,
        vec![Input::new("Rate (%)", json!(args.rate))],
        ResultValue::Scalar(returns::rule_of_72(args.rate)),
    ))
}

//! Time-value-of-money commands: PV, FV, CI, PMT and AM.

use clap::Args;
use serde_json::json;

use finmath_analytics::tvm;
use finmath_analytics::Formula;
use finmath_core::PaymentType;

use super::{Evaluation, Input, ResultValue};
use crate::error::CliResult;

/// Arguments shared by the present and future value commands.
#[derive(Args, Debug)]
pub struct TimeValueArgs {
    /// Rate per period (as percentage, e.g., 5.0 for 5%)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Cash flow amount
    #[arg(short, long, allow_negative_numbers = true)]
    pub cash_flow: f64,

    /// Number of periods
    #[arg(short, long, allow_negative_numbers = true)]
    pub period: f64,
}

impl TimeValueArgs {
    fn inputs(&self) -> Vec<Input> {
        vec![
            Input::new("Rate (%)", json!(self.rate)),
            Input::new("Cash flow", json!(self.cash_flow)),
            Input::new("Periods", json!(self.period)),
        ]
    }
}

/// Arguments for the compound interest command.
#[derive(Args, Debug)]
pub struct CompoundInterestArgs {
    /// Rate per period (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Compoundings per period
    #[arg(short = 'n', long)]
    pub compoundings: f64,

    /// Principal
    #[arg(short = 'P', long, allow_negative_numbers = true)]
    pub principal: f64,

    /// Number of periods
    #[arg(short, long)]
    pub periods: f64,
}

/// Arguments for the annuity payment command.
#[derive(Args, Debug)]
pub struct PaymentArgs {
    /// Rate per period (as percentage)
    #[arg(short, long, allow_negative_numbers = true)]
    pub rate: f64,

    /// Number of payments
    #[arg(short = 'n', long)]
    pub payments: f64,

    /// Principal (negative for an amount borrowed)
    #[arg(short = 'P', long, allow_negative_numbers = true)]
    pub principal: f64,
}

/// Arguments for the amortization command.
#[derive(Args, Debug)]
pub struct AmortizationArgs {
    /// Principal
    #[arg(short = 'P', long)]
    pub principal: f64,

    /// Annual rate (as percentage)
    #[arg(short, long)]
    pub rate: f64,

    /// Term, in units of --payment-type
    #[arg(short, long)]
    pub period: f64,

    /// Unit of the term: years or months
    #[arg(short = 't', long, default_value = "years", value_parser = parse_payment_type)]
    pub payment_type: PaymentType,

    /// Payments fall at the beginning of each period
    #[arg(short = 'b', long)]
    pub pay_at_beginning: bool,
}

fn parse_payment_type(s: &str) -> Result<PaymentType, String> {
    s.parse::<PaymentType>().map_err(|e| e.to_string())
}

/// Present value.
pub fn present_value(args: &TimeValueArgs) -> CliResult<Evaluation> {
    let value = tvm::present_value(args.rate, args.cash_flow, args.period);
    Ok(Evaluation::new(
        Formula::PresentValue,
        args.inputs(),
        ResultValue::Scalar(value),
    ))
}

/// Future value.
pub fn future_value(args: &TimeValueArgs) -> CliResult<Evaluation> {
    let value = tvm::future_value(args.rate, args.cash_flow, args.period);
    Ok(Evaluation::new(
        Formula::FutureValue,
        args.inputs(),
        ResultValue::Scalar(value),
    ))
}

/// Compound interest.
pub fn compound_interest(args: &CompoundInterestArgs) -> CliResult<Evaluation> {
    let value = tvm::compound_interest(args.rate, args.compoundings, args.principal, args.periods);
    Ok(Evaluation::new(
        Formula::CompoundInterest,
        vec![
            Input::new("Rate (%)", json!(args.rate)),
            Input::new("Compoundings", json!(args.compoundings)),
            Input::new("Principal", json!(args.principal)),
            Input::new("Periods", json!(args.periods)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Annuity payment.
pub fn payment(args: &PaymentArgs) -> CliResult<Evaluation> {
    let value = tvm::payment(args.rate, args.payments, args.principal);
    Ok(Evaluation::new(
        Formula::Payment,
        vec![
            Input::new("Rate (%)", json!(args.rate)),
            Input::new("Payments", json!(args.payments)),
            Input::new("Principal", json!(args.principal)),
        ],
        ResultValue::Scalar(value),
    ))
}

/// Amortization installment.
pub fn amortization(args: &AmortizationArgs) -> CliResult<Evaluation> {
    let value = tvm::amortization(
        args.principal,
        args.rate,
        args.period,
        args.payment_type,
        args.pay_at_beginning,
    );
    Ok(Evaluation::new(
        Formula::Amortization,
        vec![
            Input::new("Principal", json!(args.principal)),
            Input::new("Annual rate (%)", json!(args.rate)),
            Input::new("Term", json!(args.period)),
            Input::new("Payment type", json!(args.payment_type.as_str())),
            Input::new("Pay at beginning", json!(args.pay_at_beginning)),
        ],
        ResultValue::Scalar(value),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_payment_type() {
        assert_eq!(parse_payment_type("months"), Ok(PaymentType::Months));
        let err = parse_payment_type("weeks").unwrap_err();
        assert!(err.contains("Invalid payment type"));
    }

    #[test]
    fn test_amortization_evaluation() {
        let args = AmortizationArgs {
            principal: 20_000.0,
            rate: 7.5,
            period: 60.0,
            payment_type: PaymentType::Months,
            pay_at_beginning: true,
        };
        let eval = amortization(&args).unwrap();
        assert_eq!(eval.result, ResultValue::Scalar(398.27));
        assert_eq!(eval.inputs[3].value, json!("months"));
    }

    #[test]
    fn test_present_value_evaluation() {
        let args = TimeValueArgs {
            rate: 5.0,
            cash_flow: 100.0,
            period: 5.0,
        };
        assert_eq!(present_value(&args).unwrap().result, ResultValue::Scalar(78.35));
        assert_eq!(future_value(&args).unwrap().result, ResultValue::Scalar(127.63));
    }
}

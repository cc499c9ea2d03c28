//! CLI command implementations.
//!
//! Each formula command turns its arguments into an [`Evaluation`]; the
//! dispatcher then applies the non-finite policy and prints it.

pub mod cashflows;
pub mod config;
pub mod corporate;
pub mod returns;
pub mod tvm;

pub use cashflows::{CashFlowArgs, DiscountFactorArgs, PaybackArgs};
pub use config::ConfigArgs;
pub use corporate::{CapmArgs, LeverageArgs, StockValueArgs, WaccArgs};
pub use returns::{CagrArgs, IarArgs, RoiArgs, Rule72Args};
pub use tvm::{AmortizationArgs, CompoundInterestArgs, PaymentArgs, TimeValueArgs};

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use finmath_analytics::Formula;
use finmath_core::{ensure_finite, Rounding};

use crate::cli::{Commands, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::print_evaluation;
use crate::settings::Settings;

/// Options shared by every command, after merging flags with settings.
#[derive(Debug, Clone)]
pub struct Context {
    /// Effective output format.
    pub format: OutputFormat,
    /// Whether infinite or NaN results are an error.
    pub reject_non_finite: bool,
    /// Suppress status lines.
    pub quiet: bool,
    /// Resolved settings file location.
    pub config_path: PathBuf,
}

impl Context {
    /// Merges command-line overrides over file settings.
    pub fn new(
        settings: &Settings,
        config_path: PathBuf,
        format: Option<OutputFormat>,
        allow_non_finite: bool,
        quiet: bool,
    ) -> Self {
        Self {
            format: format.unwrap_or(settings.format),
            reject_non_finite: settings.reject_non_finite && !allow_non_finite,
            quiet,
            config_path,
        }
    }
}

/// A formula result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResultValue {
    /// A single number.
    Scalar(f64),
    /// One number per period.
    Series(Vec<f64>),
}

/// A named input echoed back with the result.
#[derive(Debug, Clone, Serialize)]
pub struct Input {
    /// Display name.
    pub name: &'static str,
    /// The value as given.
    pub value: serde_json::Value,
}

impl Input {
    /// Creates a new input entry.
    pub fn new(name: &'static str, value: serde_json::Value) -> Self {
        Self { name, value }
    }
}

/// A formula evaluated against concrete inputs.
#[derive(Debug, Clone, Serialize)]
pub struct Evaluation {
    /// Which formula ran.
    pub formula: Formula,
    /// Inputs, in argument order.
    pub inputs: Vec<Input>,
    /// The result.
    pub result: ResultValue,
    /// Rounding applied by the formula.
    pub rounding: Rounding,
}

impl Evaluation {
    /// Creates an evaluation, recording the formula's rounding policy.
    pub fn new(formula: Formula, inputs: Vec<Input>, result: ResultValue) -> Self {
        Self {
            formula,
            inputs,
            result,
            rounding: formula.rounding(),
        }
    }

    /// Fails if any result value is infinite or NaN.
    pub fn ensure_finite(&self) -> CliResult<()> {
        let name = self.formula.abbreviation();
        match &self.result {
            ResultValue::Scalar(v) => {
                ensure_finite(name, *v)?;
            }
            ResultValue::Series(values) => {
                for v in values {
                    ensure_finite(name, *v)?;
                }
            }
        }
        Ok(())
    }
}

/// Rejects an empty cash-flow list before it reaches a formula.
pub fn require_cash_flows(formula: &'static str, cash_flows: &[f64]) -> CliResult<()> {
    if cash_flows.is_empty() {
        return Err(CliError::MissingCashFlows(formula));
    }
    Ok(())
}

/// Executes a formula command.
pub fn execute(command: Commands, ctx: &Context) -> Result<()> {
    let eval = match command {
        Commands::Pv(args) => tvm::present_value(&args)?,
        Commands::Fv(args) => tvm::future_value(&args)?,
        Commands::Npv(args) => cashflows::net_present_value(&args)?,
        Commands::Roi(args) => returns::return_on_investment(&args)?,
        Commands::Pp(args) => cashflows::payback_period(&args)?,
        Commands::Am(args) => tvm::amortization(&args)?,
        Commands::Df(args) => cashflows::discount_factors(&args)?,
        Commands::Ci(args) => tvm::compound_interest(&args)?,
        Commands::Cagr(args) => returns::compound_annual_growth_rate(&args)?,
        Commands::Lr(args) => corporate::leverage_ratio(&args)?,
        Commands::R72(args) => returns::rule_of_72(&args)?,
        Commands::Pmt(args) => tvm::payment(&args)?,
        Commands::Iar(args) => returns::inflation_adjusted_return(&args)?,
        Commands::Wacc(args) => corporate::weighted_average_cost_of_capital(&args)?,
        Commands::Pi(args) => cashflows::profitability_index(&args)?,
        Commands::Capm(args) => corporate::capital_asset_pricing_model(&args)?,
        Commands::StockPv(args) => corporate::stock_present_value(&args)?,
        Commands::Config(args) => return config::execute(args, ctx),
    };

    tracing::debug!(
        formula = eval.formula.abbreviation(),
        result = ?eval.result,
        "evaluated"
    );

    if ctx.reject_non_finite {
        eval.ensure_finite()?;
    }
    print_evaluation(&eval, ctx.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_merge() {
        let settings = Settings {
            format: OutputFormat::Json,
            reject_non_finite: true,
        };
        let path = PathBuf::from("config.toml");
        let ctx = Context::new(&settings, path.clone(), None, false, false);
        assert_eq!(ctx.format, OutputFormat::Json);
        assert!(ctx.reject_non_finite);

        let ctx = Context::new(&settings, path, Some(OutputFormat::Minimal), true, true);
        assert_eq!(ctx.format, OutputFormat::Minimal);
        assert!(!ctx.reject_non_finite);
        assert!(ctx.quiet);
    }

    #[test]
    fn test_ensure_finite_series() {
        let eval = Evaluation::new(
            Formula::DiscountFactors,
            vec![],
            ResultValue::Series(vec![1.0, f64::NAN]),
        );
        assert!(matches!(eval.ensure_finite(), Err(CliError::Finance(_))));

        let eval = Evaluation::new(Formula::RuleOf72, vec![], ResultValue::Scalar(7.2));
        assert!(eval.ensure_finite().is_ok());
    }

    #[test]
    fn test_require_cash_flows() {
        assert!(require_cash_flows("NPV", &[]).is_err());
        assert!(require_cash_flows("NPV", &[1.0]).is_ok());
    }

    #[test]
    fn test_evaluation_json() {
        let eval = Evaluation::new(Formula::RuleOf72, vec![], ResultValue::Scalar(7.2));
        let json = serde_json::to_value(&eval).unwrap();
        assert_eq!(json["formula"], "rule_of_72");
        assert_eq!(json["result"], 7.2);
        assert_eq!(json["rounding"]["mode"], "unrounded");
    }
}

//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::commands::{
    AmortizationArgs, CagrArgs, CapmArgs, CashFlowArgs, CompoundInterestArgs, ConfigArgs,
    DiscountFactorArgs, IarArgs, LeverageArgs, PaybackArgs, PaymentArgs, RoiArgs, Rule72Args,
    StockValueArgs, TimeValueArgs, WaccArgs,
};

/// Finmath - financial formula calculator
#[derive(Parser)]
#[command(name = "finmath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (defaults to the configured format, else table)
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Configuration file
    #[arg(long, global = true, env = "FINMATH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print infinite or NaN results instead of failing
    #[arg(long, global = true)]
    pub allow_non_finite: bool,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Present Value of a single future cash flow
    Pv(TimeValueArgs),

    /// Future Value of a sum held today
    Fv(TimeValueArgs),

    /// Net Present Value of an investment and its cash flows
    Npv(CashFlowArgs),

    /// Return On Investment, in percent
    Roi(RoiArgs),

    /// Payback Period, in periods
    Pp(PaybackArgs),

    /// Amortization: fixed monthly installment on a loan
    Am(AmortizationArgs),

    /// Discount Factors for consecutive periods
    Df(DiscountFactorArgs),

    /// Compound Interest: final balance after compounding
    Ci(CompoundInterestArgs),

    /// Compound Annual Growth Rate, in percent
    Cagr(CagrArgs),

    /// Leverage Ratio
    Lr(LeverageArgs),

    /// Rule of 72: periods to double at a given rate
    R72(Rule72Args),

    /// Annuity payment per period
    Pmt(PaymentArgs),

    /// Inflation-adjusted Return, in percent
    Iar(IarArgs),

    /// Weighted Average Cost of Capital, in percent
    Wacc(WaccArgs),

    /// Profitability Index of an investment and its cash flows
    Pi(CashFlowArgs),

    /// Capital Asset Pricing Model expected return
    Capm(CapmArgs),

    /// Value of a stock with constantly growing dividends
    StockPv(StockValueArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the value)
    Minimal,
}

impl OutputFormat {
    /// Lowercase name, as accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Table => "table",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Minimal => "minimal",
        }
    }
}

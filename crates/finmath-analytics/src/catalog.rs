//! Catalog of the formulas in this crate and their rounding policies.
//!
//! Every formula rounds through the policy listed here, so the table below
//! is the single place where output precision is decided.
//!
//! | Formula | Rounding |
//! |---|---|
//! | PV, FV, NPV, ROI, AM, CI, PMT, PI | nearest, 2 dp |
//! | DF | ceiling, 3 dp |
//! | CAGR | percent, 2 dp |
//! | WACC | percent, 1 dp |
//! | StockPV | nearest, 0 dp |
//! | PP, LR, R72, IAR, CAPM | unrounded |

use serde::{Deserialize, Serialize};
use std::fmt;

use finmath_core::Rounding;

/// Identifies a formula in the library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Formula {
    /// Present Value.
    PresentValue,
    /// Future Value.
    FutureValue,
    /// Net Present Value.
    NetPresentValue,
    /// Return On Investment.
    ReturnOnInvestment,
    /// Payback Period.
    PaybackPeriod,
    /// Amortization payment.
    Amortization,
    /// Discount Factors.
    DiscountFactors,
    /// Compound Interest.
    CompoundInterest,
    /// Compound Annual Growth Rate.
    CompoundAnnualGrowthRate,
    /// Leverage Ratio.
    LeverageRatio,
    /// Rule of 72.
    #[serde(rename = "rule_of_72")]
    RuleOf72,
    /// Annuity payment.
    Payment,
    /// Inflation-adjusted Return.
    InflationAdjustedReturn,
    /// Weighted Average Cost of Capital.
    WeightedAverageCostOfCapital,
    /// Profitability Index.
    ProfitabilityIndex,
    /// Capital Asset Pricing Model.
    CapitalAssetPricingModel,
    /// Stock value under constant dividend growth.
    StockPresentValue,
}

impl Formula {
    /// All formulas, in catalog order.
    pub const ALL: [Formula; 17] = [
        Formula::PresentValue,
        Formula::FutureValue,
        Formula::NetPresentValue,
        Formula::ReturnOnInvestment,
        Formula::PaybackPeriod,
        Formula::Amortization,
        Formula::DiscountFactors,
        Formula::CompoundInterest,
        Formula::CompoundAnnualGrowthRate,
        Formula::LeverageRatio,
        Formula::RuleOf72,
        Formula::Payment,
        Formula::InflationAdjustedReturn,
        Formula::WeightedAverageCostOfCapital,
        Formula::ProfitabilityIndex,
        Formula::CapitalAssetPricingModel,
        Formula::StockPresentValue,
    ];

    /// Output rounding applied by this formula.
    #[must_use]
    pub const fn rounding(&self) -> Rounding {
        match self {
            Formula::PresentValue
            | Formula::FutureValue
            | Formula::NetPresentValue
            | Formula::ReturnOnInvestment
            | Formula::Amortization
            | Formula::CompoundInterest
            | Formula::Payment
            | Formula::ProfitabilityIndex => Rounding::CENTS,
            Formula::DiscountFactors => Rounding::Ceil { decimals: 3 },
            Formula::CompoundAnnualGrowthRate => Rounding::Percent { decimals: 2 },
            Formula::WeightedAverageCostOfCapital => Rounding::Percent { decimals: 1 },
            Formula::StockPresentValue => Rounding::WHOLE,
            Formula::PaybackPeriod
            | Formula::LeverageRatio
            | Formula::RuleOf72
            | Formula::InflationAdjustedReturn
            | Formula::CapitalAssetPricingModel => Rounding::Unrounded,
        }
    }

    /// Conventional abbreviation (e.g. `NPV`).
    #[must_use]
    pub const fn abbreviation(&self) -> &'static str {
        match self {
            Formula::PresentValue => "PV",
            Formula::FutureValue => "FV",
            Formula::NetPresentValue => "NPV",
            Formula::ReturnOnInvestment => "ROI",
            Formula::PaybackPeriod => "PP",
            Formula::Amortization => "AM",
            Formula::DiscountFactors => "DF",
            Formula::CompoundInterest => "CI",
            Formula::CompoundAnnualGrowthRate => "CAGR",
            Formula::LeverageRatio => "LR",
            Formula::RuleOf72 => "R72",
            Formula::Payment => "PMT",
            Formula::InflationAdjustedReturn => "IAR",
            Formula::WeightedAverageCostOfCapital => "WACC",
            Formula::ProfitabilityIndex => "PI",
            Formula::CapitalAssetPricingModel => "CAPM",
            Formula::StockPresentValue => "StockPV",
        }
    }

    /// Human-readable name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Formula::PresentValue => "Present Value",
            Formula::FutureValue => "Future Value",
            Formula::NetPresentValue => "Net Present Value",
            Formula::ReturnOnInvestment => "Return On Investment",
            Formula::PaybackPeriod => "Payback Period",
            Formula::Amortization => "Amortization",
            Formula::DiscountFactors => "Discount Factors",
            Formula::CompoundInterest => "Compound Interest",
            Formula::CompoundAnnualGrowthRate => "Compound Annual Growth Rate",
            Formula::LeverageRatio => "Leverage Ratio",
            Formula::RuleOf72 => "Rule of 72",
            Formula::Payment => "Payment",
            Formula::InflationAdjustedReturn => "Inflation-adjusted Return",
            Formula::WeightedAverageCostOfCapital => "Weighted Average Cost of Capital",
            Formula::ProfitabilityIndex => "Profitability Index",
            Formula::CapitalAssetPricingModel => "Capital Asset Pricing Model",
            Formula::StockPresentValue => "Stock Present Value",
        }
    }

    /// Whether the result is expressed in percent.
    #[must_use]
    pub const fn is_percent(&self) -> bool {
        matches!(
            self,
            Formula::ReturnOnInvestment
                | Formula::CompoundAnnualGrowthRate
                | Formula::InflationAdjustedReturn
                | Formula::WeightedAverageCostOfCapital
        )
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.abbreviation())
    }
}

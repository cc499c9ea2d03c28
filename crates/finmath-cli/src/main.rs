//! Finmath CLI - Command-line interface for the finmath formula library.
//!
//! # Usage
//!
//! ```bash
//! # Present value of 100 received in 5 periods at 5%
//! finmath pv --rate 5 --cash-flow 100 --period 5
//!
//! # Net present value
//! finmath npv --rate 10 --initial-investment -500000 --cash-flows 200000,300000,200000
//!
//! # Monthly installment on a 5-year loan, paid in advance
//! finmath am --principal 20000 --rate 7.5 --period 5 --payment-type years --pay-at-beginning
//!
//! # Discount factors as JSON
//! finmath --format json df --rate 10 --periods 6
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;
mod settings;

use cli::Cli;
use commands::Context;
use settings::Settings;

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Load settings; flags take precedence
    let config_path = settings::config_path(cli.config.as_deref())?;
    let settings = Settings::load_or_default(&config_path)?;
    let ctx = Context::new(
        &settings,
        config_path,
        cli.format,
        cli.allow_non_finite,
        cli.quiet,
    );

    commands::execute(cli.command, &ctx)
}

/// Logs go to stderr so that stdout carries only results.
fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "warn,finmath=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));

    // `log` records from the library crates are bridged by `try_init`
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

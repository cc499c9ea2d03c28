//! Config command implementation.
//!
//! Shows and initialises the settings file.

use anyhow::Result;
use clap::{Args, Subcommand};

use super::Context;
use crate::cli::OutputFormat;
use crate::output::{print_header, print_info, print_key_values, print_success, KeyValue};
use crate::settings::Settings;

/// Arguments for the config command.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Show configuration file location
    Path,

    /// Write a settings file with default values
    Init(InitArgs),
}

/// Arguments for init subcommand.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Execute the config command.
pub fn execute(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => execute_show(ctx),
        ConfigCommand::Path => execute_path(ctx),
        ConfigCommand::Init(init_args) => execute_init(&init_args, ctx),
    }
}

/// Show the effective configuration, flags applied.
fn execute_show(ctx: &Context) -> Result<()> {
    let rows = vec![
        KeyValue::new("format", ctx.format.as_str()),
        KeyValue::new("reject_non_finite", ctx.reject_non_finite.to_string()),
    ];

    if ctx.format == OutputFormat::Table && !ctx.quiet {
        print_header("Current Configuration");
    }
    print_key_values(&rows, ctx.format)
}

/// Show configuration file path.
fn execute_path(ctx: &Context) -> Result<()> {
    let path = &ctx.config_path;
    println!("{}", path.display());
    if !ctx.quiet {
        if path.exists() {
            print_info("Status: exists");
        } else {
            print_info("Status: not created yet (using defaults)");
        }
    }
    Ok(())
}

/// Write default settings.
fn execute_init(args: &InitArgs, ctx: &Context) -> Result<()> {
    let path = &ctx.config_path;
    if path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config file already exists: {}. Use --force to overwrite.",
            path.display()
        ));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, Settings::default().to_toml()?)?;
    tracing::info!(path = %path.display(), "wrote default settings");

    if !ctx.quiet {
        print_success(&format!("Wrote {}", path.display()));
    }
    Ok(())
}

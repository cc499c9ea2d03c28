//! CLI error types.

use std::path::PathBuf;

use finmath_core::FinanceError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Error raised by the formula library.
    #[error(transparent)]
    Finance(#[from] FinanceError),

    /// A formula needs at least one cash flow.
    #[error("Missing cash flows: {0} needs at least one value")]
    MissingCashFlows(&'static str),

    /// Configuration file could not be parsed.
    #[error("Invalid configuration in {path}: {reason}")]
    Config {
        /// The file that failed to parse.
        path: PathBuf,
        /// Parser message.
        reason: String,
    },

    /// Configuration directory could not be determined.
    #[error("Could not determine config directory")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

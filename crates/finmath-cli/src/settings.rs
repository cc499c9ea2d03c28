//! Persistent CLI settings.
//!
//! Settings live in a TOML file. The location is, in order: `--config`,
//! `$FINMATH_CONFIG`, then `<config dir>/finmath/config.toml`. A missing
//! file yields the defaults; command-line flags override file values.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};

/// CLI settings loaded from the configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Output format used when `--format` is not given.
    pub format: OutputFormat,

    /// Fail instead of printing infinite or NaN results.
    pub reject_non_finite: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            format: OutputFormat::Table,
            reject_non_finite: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    pub fn from_file(path: &Path) -> CliResult<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::Config {
            path: path.to_path_buf(),
            reason: e.message().to_string(),
        })
    }

    /// Loads settings from `path`, or the defaults if it does not exist.
    pub fn load_or_default(path: &Path) -> CliResult<Self> {
        if path.exists() {
            tracing::debug!(path = %path.display(), "loading settings");
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no settings file, using defaults");
            Ok(Self::default())
        }
    }

    /// Serializes settings as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(self).map_err(|e| CliError::Serialization(e.to_string()))
    }
}

/// Resolves the settings file location.
pub fn config_path(explicit: Option<&Path>) -> CliResult<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoConfigDir)?;
    Ok(base.join("finmath").join("config.toml"))
}

//! Configuration loading from TOML files.
//!
//! Lookup order:
//! 1. `--config <path>`
//! 2. `$FREQSTAT_CONFIG` environment variable
//! 3. Built-in defaults (everything is optional)

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub output: OutputConfig,
    pub entry: EntryConfig,
}

/// Report rendering settings.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places in text reports.
    pub precision: usize,
    pub format: OutputFormat,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Table entry settings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct EntryConfig {
    /// Row limit; defaults to the number of rows supplied.
    pub rows_limit: Option<usize>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            precision: 4,
            format: OutputFormat::Text,
        }
    }
}

/// A frequency table stored on disk.
///
/// ```toml
/// rows_limit = 3
/// rows = [
///     { interval = "10-20", frequency = 5 },
///     { interval = "20-30", frequency = 8 },
///     { interval = "30-40", frequency = 3 },
/// ]
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TableFile {
    pub rows_limit: Option<usize>,
    pub rows: Vec<RowSpec>,
}

#[derive(Debug, Deserialize)]
pub struct RowSpec {
    pub interval: String,
    pub frequency: i64,
}

/// Load config from disk. Returns defaults if no config file is configured.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match config_path(explicit) {
        Some(p) => {
            let content =
                std::fs::read_to_string(&p).with_context(|| format!("reading {}", p.display()))?;
            toml::from_str(&content).with_context(|| format!("parsing {}", p.display()))
        }
        None => Ok(Config::default()),
    }
}

/// Load a table file.
pub fn load_table(path: &Path) -> Result<TableFile> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
}

fn config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }
    std::env::var_os("FREQSTAT_CONFIG").map(PathBuf::from)
}

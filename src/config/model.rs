use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::{ColorMode, OutputFormat};

/// Root of `.bikeshare.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

/// Where the city CSV files live.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DataConfig {
    /// Directory holding `chicago.csv`, `new_york_city.csv` and `washington.csv`.
    /// Relative paths resolve against the working directory. Defaults to `.`.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

/// How reports are rendered.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,

    #[serde(default)]
    pub color: ColorMode,

    /// Print the elapsed time after each statistics section.
    #[serde(default = "default_true")]
    pub timing: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: ColorMode::default(),
            timing: true,
        }
    }
}

const fn default_true() -> bool {
    true
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;

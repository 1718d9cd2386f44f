//! Run configuration
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, an optional TOML file passed with `--config`, and built-in defaults.
//! Nothing is read from the environment.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::order::FrameOrder;

/// Configuration loading error
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// File I/O error
    #[error("Failed to read config '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// TOML parsing error
    #[error("Failed to parse config '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    /// Validation error
    #[error("Config validation failed:\n{}", .0.iter().map(|e| format!("  - {}", e)).collect::<Vec<_>>().join("\n"))]
    Validation(Vec<String>),
}

/// Settings that may be stored in a config file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    /// Output image format
    #[serde(default = "default_format")]
    pub format: String,
    /// Frame ordering policy
    #[serde(default)]
    pub order: FrameOrder,
    /// Continue with the next animation when one fails
    #[serde(default)]
    pub keep_going: bool,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self { format: default_format(), order: FrameOrder::default(), keep_going: false }
    }
}

fn default_format() -> String {
    "png".to_string()
}

impl FileConfig {
    /// Validate the configuration, returning every problem found.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        if self.format.trim().is_empty() {
            errors.push("format must not be empty".to_string());
        }
        if self.format.contains(|c: char| c == '/' || c == '\\') {
            errors.push(format!("format '{}' must not contain path separators", self.format));
        }
        errors
    }

    /// Return the configuration if it passes [`FileConfig::validate`].
    pub fn validated(self) -> Result<Self, ConfigError> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Flags given on the command line, overriding file values when set
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    /// Override output format
    pub format: Option<String>,
    /// Override frame ordering
    pub order: Option<FrameOrder>,
    /// Enable per-animation failure isolation
    pub keep_going: Option<bool>,
}

/// Fully resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetConfig {
    /// Directory holding the source frames
    pub input_dir: PathBuf,
    /// Existing directory that receives the sheets
    pub output_dir: PathBuf,
    /// Output format name, also the output file extension
    pub format: String,
    /// Frame ordering policy
    pub order: FrameOrder,
    /// Continue past failed animations and report a summary
    pub keep_going: bool,
}

impl SheetConfig {
    /// Configuration with default settings.
    pub fn new(input_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self::from_file_config(input_dir, output_dir, FileConfig::default())
    }

    /// Build a configuration from file settings.
    pub fn from_file_config(
        input_dir: impl Into<PathBuf>,
        output_dir: impl Into<PathBuf>,
        file: FileConfig,
    ) -> Self {
        Self {
            input_dir: input_dir.into(),
            output_dir: output_dir.into(),
            format: file.format,
            order: file.order,
            keep_going: file.keep_going,
        }
    }

    /// Set the output format.
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Set the frame ordering policy.
    pub fn with_order(mut self, order: FrameOrder) -> Self {
        self.order = order;
        self
    }

    /// Enable or disable per-animation failure isolation.
    pub fn with_keep_going(mut self, keep_going: bool) -> Self {
        self.keep_going = keep_going;
        self
    }
}

/// Load a config file.
pub fn load_config_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let contents = fs::read_to_string(path)
        .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
    let config: FileConfig = toml::from_str(&contents)
        .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;

    config.validated()
}

/// Load the config file if one was given, defaults otherwise.
pub fn load_config(path: Option<&Path>) -> Result<FileConfig, ConfigError> {
    match path {
        Some(p) => load_config_file(p),
        None => Ok(FileConfig::default()),
    }
}

/// Apply CLI overrides on top of file settings.
pub fn merge_cli_overrides(config: &mut FileConfig, overrides: &CliOverrides) {
    if let Some(ref format) = overrides.format {
        config.format = format.clone();
    }
    if let Some(order) = overrides.order {
        config.order = order;
    }
    if let Some(keep_going) = overrides.keep_going {
        config.keep_going = keep_going;
    }
}

/// Load the optional config file, apply CLI overrides, and validate the result.
///
/// Flags go through the same checks as file values.
pub fn resolve_file_config(
    path: Option<&Path>,
    overrides: &CliOverrides,
) -> Result<FileConfig, ConfigError> {
    let mut config = load_config(path)?;
    merge_cli_overrides(&mut config, overrides);
    config.validated()
}

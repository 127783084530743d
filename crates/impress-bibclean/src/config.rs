//! Configuration for impress-bibclean
//!
//! Loaded from a TOML file and then overridden by command-line flags.
//! Every field has a default, so a config file only needs the keys it changes.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::cleaner::{CleanOptions, DEFAULT_ATTACHMENT_PREFIX};
use crate::encoding::EncodingPolicy;
use crate::error::{CleanError, Result};

/// Output name used when none is configured
pub const DEFAULT_OUTPUT_PATH: &str = "mendeley.bib";

/// Run configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Bibliography exported by the reference manager
    pub source_path: Option<PathBuf>,
    /// Cleaned output, relative to the working directory unless absolute
    pub output_path: PathBuf,
    /// Lines starting with this prefix are removed
    pub attachment_prefix: String,
    /// Abort on any character outside ASCII
    pub ascii_only: bool,
    /// Ignore leading indentation when matching the prefix
    pub trim_indent: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            source_path: None,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            attachment_prefix: DEFAULT_ATTACHMENT_PREFIX.to_string(),
            ascii_only: false,
            trim_indent: true,
        }
    }
}

impl CleanerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).map_err(|e| CleanError::Config(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| CleanError::Config(e.to_string()))
    }

    /// Read and parse a TOML config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| CleanError::io(path, e))?;
        let config = Self::from_toml(&content)?;
        tracing::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.source_path.is_none() {
            return Err(CleanError::Config(
                "no source bibliography given".to_string(),
            ));
        }

        if self.output_path.as_os_str().is_empty() {
            return Err(CleanError::Config(
                "output_path must not be empty".to_string(),
            ));
        }

        if self.attachment_prefix.is_empty() {
            // An empty prefix matches every line and would empty every entry
            return Err(CleanError::Config(
                "attachment_prefix must not be empty".to_string(),
            ));
        }

        Ok(())
    }

    pub fn clean_options(&self) -> CleanOptions {
        CleanOptions {
            attachment_prefix: self.attachment_prefix.clone(),
            trim_indent: self.trim_indent,
        }
    }

    pub fn encoding_policy(&self) -> EncodingPolicy {
        EncodingPolicy::from_ascii_only(self.ascii_only)
    }
}

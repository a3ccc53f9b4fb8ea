//! Lint configuration
//!
//! An optional `.claudemd-lint.toml` switches rules off, either one at a
//! time by name or a whole category at once:
//!
//! ```toml
//! disable = ["content/uses-imperatives", "hooks"]
//! ```

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::services::Engine;
use crate::core::rules::{self, Rule};

/// Config file name looked up next to the linted document
pub const CONFIG_FILE: &str = ".claudemd-lint.toml";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("failed to read {}", .path.display())]
    Read {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A `disable` entry names neither a rule nor a category
    #[error("unknown rule or category in disable list: {0}")]
    UnknownRule(String),
}

/// Parsed `.claudemd-lint.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LintConfig {
    /// Rule names or categories to switch off
    #[serde(default)]
    pub disable: Vec<String>,
}

impl LintConfig {
    /// Parse and validate configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit path
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content)?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Load [`CONFIG_FILE`] from `dir` if present, otherwise the default
    pub fn discover(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if path.is_file() {
            Self::load(&path)
        } else {
            log::debug!("no {CONFIG_FILE} in {}, all rules enabled", dir.display());
            Ok(Self::default())
        }
    }

    /// Resolve configuration: `explicit` wins, otherwise discovery in `dir`
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(dir),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let known = rules::all();
        for entry in &self.disable {
            let matches = known
                .iter()
                .any(|rule| rule.name() == entry || category_of(&**rule) == entry);
            if !matches {
                return Err(ConfigError::UnknownRule(entry.clone()));
            }
        }
        Ok(())
    }

    /// Whether `rule` is switched off by name or by category
    #[must_use]
    pub fn disables(&self, rule: &dyn Rule) -> bool {
        self.disable
            .iter()
            .any(|entry| entry == rule.name() || entry == category_of(rule))
    }

    /// Engine with every rule this configuration leaves enabled
    #[must_use]
    pub fn engine(&self) -> Engine {
        Engine::new().retain(|rule| !self.disables(rule))
    }
}

fn category_of(rule: &dyn Rule) -> &'static str {
    rule.name().split('/').next().unwrap_or_default()
}

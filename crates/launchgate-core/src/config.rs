//! Drill configuration.
//!
//! Configuration is validated at load time, with defaults for everything
//! except the drill name and its codes.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{LaunchError, Result};
use crate::session::RetirePolicy;

/// A scripted sequence of launch attempts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrillConfig {
    /// Drill name (must be valid identifier).
    pub name: String,

    /// When presented codes are recorded as used.
    #[serde(default)]
    pub retire: RetirePolicy,

    /// Codes issued for this drill.
    #[serde(default)]
    pub codes: Vec<CodeSpec>,

    /// Labels of the codes to present, in order.
    #[serde(default)]
    pub attempts: Vec<String>,
}

/// Flags for one issued code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeSpec {
    /// Label used by `attempts`.
    pub label: String,

    /// Whether the code has expired.
    #[serde(default)]
    pub expired: bool,

    /// Whether the code is unsigned.
    #[serde(default)]
    pub unsigned: bool,
}

impl DrillConfig {
    /// Creates an empty drill configuration.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            retire: RetirePolicy::default(),
            codes: Vec::new(),
            attempts: Vec::new(),
        }
    }

    /// Adds a code spec.
    #[must_use]
    pub fn with_code(mut self, label: impl Into<String>, expired: bool, unsigned: bool) -> Self {
        self.codes.push(CodeSpec {
            label: label.into(),
            expired,
            unsigned,
        });
        self
    }

    /// Appends an attempt.
    #[must_use]
    pub fn with_attempt(mut self, label: impl Into<String>) -> Self {
        self.attempts.push(label.into());
        self
    }

    /// Sets the retire policy.
    #[must_use]
    pub const fn with_retire(mut self, retire: RetirePolicy) -> Self {
        self.retire = retire;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.name.is_empty() {
            return Err(LaunchError::config("name cannot be empty"));
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return Err(LaunchError::config(
                "name must contain only alphanumeric characters, hyphens, and underscores",
            ));
        }

        let mut labels = HashSet::new();
        for spec in &self.codes {
            if spec.label.is_empty() {
                return Err(LaunchError::config("code label cannot be empty"));
            }
            if !labels.insert(spec.label.as_str()) {
                return Err(LaunchError::config(format!(
                    "duplicate code label: {}",
                    spec.label
                )));
            }
        }

        if let Some(unknown) = self
            .attempts
            .iter()
            .find(|label| !labels.contains(label.as_str()))
        {
            return Err(LaunchError::unknown_code(unknown.clone()));
        }

        Ok(())
    }

    /// Parses and validates a configuration from TOML text.
    ///
    /// # Errors
    /// Returns an error if the text cannot be parsed or fails validation.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)
            .map_err(|e| LaunchError::config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    /// Returns [`LaunchError::Io`] if the file cannot be read, or a
    /// configuration error if it cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }
}

//! Running a [`DrillConfig`] through a [`LaunchSession`].

use std::collections::HashMap;

use crate::actuator::Actuator;
use crate::code::IssuedCode;
use crate::config::DrillConfig;
use crate::error::{LaunchError, Result};
use crate::registry::CodeRegistry;
use crate::session::{AttemptRecord, LaunchSession};

/// A validated drill with its codes issued.
///
/// Each label maps to a single code instance, so presenting a label twice
/// presents the same code twice.
pub struct Drill {
    config: DrillConfig,
    codes: HashMap<String, IssuedCode>,
}

impl Drill {
    /// Validates `config` and issues one code per [`CodeSpec`](crate::CodeSpec).
    ///
    /// # Errors
    /// Returns an error if the configuration is invalid.
    pub fn new(config: DrillConfig) -> Result<Self> {
        config.validate()?;
        let codes = config
            .codes
            .iter()
            .map(|spec| {
                (
                    spec.label.clone(),
                    IssuedCode::new(spec.expired, spec.unsigned),
                )
            })
            .collect();
        Ok(Self { config, codes })
    }

    /// Returns the drill name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Returns the issued code for `label`.
    #[must_use]
    pub fn code(&self, label: &str) -> Option<&IssuedCode> {
        self.codes.get(label)
    }

    /// Runs every attempt in order against a fresh registry.
    ///
    /// # Errors
    /// Returns an error if an attempt names a label with no issued code.
    pub fn run<A: Actuator>(&self, actuator: A) -> Result<Vec<AttemptRecord>> {
        tracing::info!(
            drill = %self.config.name,
            attempts = self.config.attempts.len(),
            retire = ?self.config.retire,
            "starting drill"
        );

        let mut session = LaunchSession::new(actuator, CodeRegistry::new(), self.config.retire);
        for label in &self.config.attempts {
            let code = self
                .codes
                .get(label)
                .ok_or_else(|| LaunchError::unknown_code(label.clone()))?;
            session.attempt_labeled(code, Some(label.clone()));
        }

        let records = session.history().to_vec();
        let launches = records.iter().filter(|r| r.action.is_launch()).count();
        let aborts = records.iter().filter(|r| r.action.is_abort()).count();
        tracing::info!(
            drill = %self.config.name,
            launches,
            aborts,
            "drill complete"
        );
        Ok(records)
    }
}

//! Launch sessions: authorization attempts over time.
//!
//! A session owns the used-code registry and decides, through its
//! [`RetirePolicy`], which presented codes are recorded after an attempt.

use serde::{Deserialize, Serialize};

use crate::actuator::Actuator;
use crate::code::LaunchCode;
use crate::registry::UsedCodeRegistry;
use crate::rule::AuthorizationRule;
use crate::types::{Action, CodeId};

/// When a session records a presented code as used.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetirePolicy {
    /// Record the code only after it launched.
    #[default]
    OnLaunch,
    /// Record every presented code, whatever the outcome.
    OnEveryAttempt,
    /// Never write to the registry.
    Never,
}

impl RetirePolicy {
    /// Returns true if a code that produced `action` should be retired.
    #[must_use]
    pub const fn retires(&self, action: Action) -> bool {
        match self {
            Self::OnLaunch => action.is_launch(),
            Self::OnEveryAttempt => true,
            Self::Never => false,
        }
    }
}

/// Outcome of one authorization attempt within a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttemptRecord {
    /// 1-based attempt number within the session.
    pub sequence: u64,
    /// Identity of the presented code.
    pub code: CodeId,
    /// Human label of the code, if the caller supplied one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// The action that fired.
    pub action: Action,
}

/// Runs authorization attempts against one actuator and one registry.
pub struct LaunchSession<A, R> {
    actuator: A,
    registry: R,
    retire: RetirePolicy,
    history: Vec<AttemptRecord>,
}

impl<A: Actuator, R: UsedCodeRegistry> LaunchSession<A, R> {
    /// Creates a session.
    #[must_use]
    pub fn new(actuator: A, registry: R, retire: RetirePolicy) -> Self {
        Self {
            actuator,
            registry,
            retire,
            history: Vec::new(),
        }
    }

    /// Runs one authorization attempt for `code`.
    pub fn attempt(&mut self, code: &dyn LaunchCode) -> AttemptRecord {
        self.attempt_labeled(code, None)
    }

    /// Runs one authorization attempt, tagging the record with `label`.
    pub fn attempt_labeled(
        &mut self,
        code: &dyn LaunchCode,
        label: Option<String>,
    ) -> AttemptRecord {
        let action = AuthorizationRule::new(&self.actuator, code, &self.registry).execute();

        if self.retire.retires(action) {
            self.registry.add(code);
        }

        let record = AttemptRecord {
            sequence: self.history.len() as u64 + 1,
            code: code.id(),
            label,
            action,
        };
        tracing::debug!(
            sequence = record.sequence,
            code = %record.code,
            action = %record.action,
            "attempt recorded"
        );
        self.history.push(record.clone());
        record
    }

    /// Returns all attempts so far, oldest first.
    #[must_use]
    pub fn history(&self) -> &[AttemptRecord] {
        &self.history
    }

    /// Returns a reference to the actuator.
    #[must_use]
    pub const fn actuator(&self) -> &A {
        &self.actuator
    }

    /// Returns a reference to the registry.
    #[must_use]
    pub const fn registry(&self) -> &R {
        &self.registry
    }

    /// Ends the session, returning the actuator and registry.
    #[must_use]
    pub fn into_parts(self) -> (A, R) {
        (self.actuator, self.registry)
    }
}

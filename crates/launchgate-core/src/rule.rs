//! The launch authorization rule.
//!
//! | expired | already used | action  |
//! |---------|--------------|---------|
//! | false   | false        | launch  |
//! | false   | true         | disable |
//! | true    | false        | disable |
//! | true    | true         | disable |

use crate::actuator::Actuator;
use crate::code::LaunchCode;
use crate::registry::UsedCodeRegistry;
use crate::types::Action;

/// Authorize-or-abort rule bound to one actuator, one code and one registry.
///
/// Each call to [`execute`](Self::execute) is one authorization attempt and
/// fires exactly one actuator action. The rule keeps no state between calls.
pub struct AuthorizationRule<'a> {
    actuator: &'a dyn Actuator,
    code: &'a dyn LaunchCode,
    registry: &'a dyn UsedCodeRegistry,
}

impl<'a> AuthorizationRule<'a> {
    /// Binds a rule to its collaborators.
    #[must_use]
    pub fn new(
        actuator: &'a dyn Actuator,
        code: &'a dyn LaunchCode,
        registry: &'a dyn UsedCodeRegistry,
    ) -> Self {
        Self {
            actuator,
            code,
            registry,
        }
    }

    /// Evaluates the code and fires the resulting action.
    ///
    /// Launches only if the code is neither expired nor already used;
    /// otherwise disables. An expired code short-circuits before the
    /// registry is consulted. Panics raised by a collaborator propagate
    /// to the caller untouched.
    pub fn execute(&self) -> Action {
        let code = self.code.id();
        let action = if !self.code.is_expired() && !self.registry.contains(self.code) {
            Action::Launch
        } else {
            Action::Disable
        };

        match action {
            Action::Launch => {
                tracing::info!(code = %code, "launch authorized");
                self.actuator.launch();
            }
            Action::Disable => {
                tracing::warn!(code = %code, "launch refused, disabling");
                self.actuator.disable();
            }
        }

        action
    }
}

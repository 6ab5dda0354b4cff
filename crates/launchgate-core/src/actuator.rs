//! Actuator capability.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::Action;

/// Performs the physical effect of an authorization decision.
///
/// The actuator enforces no preconditions; deciding which method to call
/// is the rule's job.
pub trait Actuator: Send + Sync {
    /// Fires the launch.
    fn launch(&self);

    /// Safes the system ("code red abort").
    fn disable(&self);
}

impl<T: Actuator + ?Sized> Actuator for &T {
    fn launch(&self) {
        (**self).launch();
    }

    fn disable(&self) {
        (**self).disable();
    }
}

/// Actuator that emits a structured log event per action.
///
/// Used by drills in place of real hardware.
#[derive(Debug, Default)]
pub struct TracingActuator {
    launches: AtomicU64,
    disables: AtomicU64,
}

impl TracingActuator {
    /// Creates a new tracing actuator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many times `action` has fired.
    #[must_use]
    pub fn count(&self, action: Action) -> u64 {
        match action {
            Action::Launch => self.launches.load(Ordering::Relaxed),
            Action::Disable => self.disables.load(Ordering::Relaxed),
        }
    }
}

impl Actuator for TracingActuator {
    fn launch(&self) {
        let n = self.launches.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(launches = n, "actuator: launch");
    }

    fn disable(&self) {
        let n = self.disables.fetch_add(1, Ordering::Relaxed) + 1;
        tracing::info!(disables = n, "actuator: disable");
    }
}

//! Dummies: passed to satisfy a signature, never meant to be used.
//!
//! Every method that is not expected to run panics with
//! `not implemented: <Type>::<method>`. The panic propagates through the
//! authorization rule, failing the test at the point of illegal use.

use std::sync::atomic::{AtomicBool, Ordering};

use launchgate_core::{Actuator, LaunchCode, UsedCodeRegistry};

#[allow(clippy::panic)]
fn not_implemented(double: &str, method: &str) -> ! {
    tracing::error!(double, method, "dummy collaborator invoked");
    panic!("not implemented: {double}::{method}");
}

/// Registry dummy: every method panics.
#[derive(Debug, Default)]
pub struct DummyRegistry;

impl DummyRegistry {
    /// Creates a registry dummy.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl UsedCodeRegistry for DummyRegistry {
    fn add(&mut self, _code: &dyn LaunchCode) {
        not_implemented("DummyRegistry", "add");
    }

    fn contains(&self, _code: &dyn LaunchCode) -> bool {
        not_implemented("DummyRegistry", "contains");
    }
}

/// Actuator dummy for paths that must never launch.
///
/// `launch` panics; `disable` is allowed and only sets a flag.
#[derive(Debug, Default)]
pub struct DummyActuator {
    disable_was_called: AtomicBool,
}

impl DummyActuator {
    /// Creates an actuator dummy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true once `disable` has run.
    #[must_use]
    pub fn disable_was_called(&self) -> bool {
        self.disable_was_called.load(Ordering::SeqCst)
    }
}

impl Actuator for DummyActuator {
    fn launch(&self) {
        not_implemented("DummyActuator", "launch");
    }

    fn disable(&self) {
        self.disable_was_called.store(true, Ordering::SeqCst);
    }
}

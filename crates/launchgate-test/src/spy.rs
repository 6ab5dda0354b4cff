//! Spies: record invocations for later assertion.

use std::sync::atomic::{AtomicU32, Ordering};

use parking_lot::Mutex;

use launchgate_core::{Action, Actuator, CodeId, CodeRegistry, LaunchCode, UsedCodeRegistry};

use crate::error::{Result, TestError};

/// Actuator spy recording every action in call order.
#[derive(Debug, Default)]
pub struct ActuatorSpy {
    calls: Mutex<Vec<Action>>,
}

impl ActuatorSpy {
    /// Creates an actuator spy with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `launch` was called at least once.
    #[must_use]
    pub fn launch_has_been_called(&self) -> bool {
        self.calls.lock().contains(&Action::Launch)
    }

    /// Returns true if `disable` was called at least once.
    #[must_use]
    pub fn disable_has_been_called(&self) -> bool {
        self.calls.lock().contains(&Action::Disable)
    }

    /// Returns the recorded calls, oldest first.
    #[must_use]
    pub fn calls(&self) -> Vec<Action> {
        self.calls.lock().clone()
    }

    /// Asserts that `launch` was never called.
    ///
    /// # Errors
    /// Returns [`TestError::Assertion`] with the number of launches seen.
    pub fn assert_never_launched(&self) -> Result<()> {
        let launches = self
            .calls
            .lock()
            .iter()
            .filter(|action| action.is_launch())
            .count();
        if launches == 0 {
            return Ok(());
        }
        Err(TestError::assertion(format!(
            "launch was called {launches} time(s)"
        )))
    }
}

impl Actuator for ActuatorSpy {
    fn launch(&self) {
        self.calls.lock().push(Action::Launch);
    }

    fn disable(&self) {
        self.calls.lock().push(Action::Disable);
    }
}

/// Registry spy: delegates to a real [`CodeRegistry`] and counts queries.
#[derive(Debug, Default)]
pub struct RegistrySpy {
    inner: CodeRegistry,
    add_count: u32,
    contains_count: AtomicU32,
    queried: Mutex<Vec<CodeId>>,
}

impl RegistrySpy {
    /// Creates an empty registry spy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of `add` calls.
    #[must_use]
    pub const fn add_count(&self) -> u32 {
        self.add_count
    }

    /// Returns the number of `contains` calls.
    #[must_use]
    pub fn contains_count(&self) -> u32 {
        self.contains_count.load(Ordering::SeqCst)
    }

    /// Returns the codes passed to `contains`, oldest first.
    #[must_use]
    pub fn queried(&self) -> Vec<CodeId> {
        self.queried.lock().clone()
    }
}

impl UsedCodeRegistry for RegistrySpy {
    fn add(&mut self, code: &dyn LaunchCode) {
        self.add_count += 1;
        self.inner.add(code);
    }

    fn contains(&self, code: &dyn LaunchCode) -> bool {
        self.contains_count.fetch_add(1, Ordering::SeqCst);
        self.queried.lock().push(code.id());
        self.inner.contains(code)
    }
}

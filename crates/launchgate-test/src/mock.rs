//! Mocks: record invocations and verify an expectation themselves.

use parking_lot::Mutex;

use launchgate_core::{Action, Actuator};

use crate::error::{Result, TestError};

/// Actuator mock that checks the attempt fired exactly the expected action.
#[derive(Debug, Default)]
pub struct ActuatorMock {
    calls: Mutex<Vec<Action>>,
}

impl ActuatorMock {
    /// Creates an actuator mock with no recorded calls.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Verifies that exactly one call was made and that it was `expected`.
    ///
    /// # Errors
    /// Returns [`TestError::Expectation`] describing the calls actually seen.
    pub fn verify(&self, expected: Action) -> Result<()> {
        let calls = self.calls.lock();
        if calls.as_slice() == [expected] {
            return Ok(());
        }
        let seen: Vec<String> = calls.iter().map(ToString::to_string).collect();
        Err(TestError::expectation(
            format!("[{expected}]"),
            format!("[{}]", seen.join(", ")),
        ))
    }

    /// Verifies the attempt aborted: `disable` ran, `launch` never did.
    ///
    /// # Errors
    /// Returns an error if the expectation was not met.
    pub fn verify_code_red_abort(&self) -> Result<()> {
        self.verify(Action::Disable)
    }

    /// Verifies the attempt launched: `launch` ran, `disable` never did.
    ///
    /// # Errors
    /// Returns an error if the expectation was not met.
    pub fn verify_launched(&self) -> Result<()> {
        self.verify(Action::Launch)
    }
}

impl Actuator for ActuatorMock {
    fn launch(&self) {
        self.calls.lock().push(Action::Launch);
    }

    fn disable(&self) {
        self.calls.lock().push(Action::Disable);
    }
}

//! Stubs: fixed, canned answers.

use launchgate_core::{CodeId, LaunchCode, UsedCodeRegistry};

/// A code that always reports itself expired.
#[derive(Debug, Default)]
pub struct ExpiredCodeStub {
    id: CodeId,
}

impl ExpiredCodeStub {
    /// Creates an expired code stub with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LaunchCode for ExpiredCodeStub {
    fn id(&self) -> CodeId {
        self.id
    }

    fn is_expired(&self) -> bool {
        true
    }

    fn is_unsigned(&self) -> bool {
        false
    }
}

/// A code that is neither expired nor unsigned.
#[derive(Debug, Default)]
pub struct ValidCodeStub {
    id: CodeId,
}

impl ValidCodeStub {
    /// Creates a valid code stub with a fresh identity.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl LaunchCode for ValidCodeStub {
    fn id(&self) -> CodeId {
        self.id
    }

    fn is_expired(&self) -> bool {
        false
    }

    fn is_unsigned(&self) -> bool {
        false
    }
}

/// A registry that gives the same membership answer for every code.
///
/// `add` is accepted and ignored.
#[derive(Debug, Clone, Copy)]
pub struct RegistryStub {
    answer: bool,
}

impl RegistryStub {
    /// A registry that reports every code as already used.
    #[must_use]
    pub const fn all_used() -> Self {
        Self { answer: true }
    }

    /// A registry that reports no code as used.
    #[must_use]
    pub const fn none_used() -> Self {
        Self { answer: false }
    }
}

impl UsedCodeRegistry for RegistryStub {
    fn add(&mut self, _code: &dyn LaunchCode) {}

    fn contains(&self, _code: &dyn LaunchCode) -> bool {
        self.answer
    }
}

//! Fakes: working, list-backed implementations.

use launchgate_core::{CodeId, LaunchCode, UsedCodeRegistry};

/// Registry backed by a plain list of code identities.
///
/// Duplicates are stored as-is; membership is unaffected by them.
#[derive(Debug, Default)]
pub struct FakeRegistry {
    codes: Vec<CodeId>,
}

impl FakeRegistry {
    /// Creates an empty fake registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries, duplicates included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if nothing has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl UsedCodeRegistry for FakeRegistry {
    fn add(&mut self, code: &dyn LaunchCode) {
        self.codes.push(code.id());
    }

    fn contains(&self, code: &dyn LaunchCode) -> bool {
        self.codes.contains(&code.id())
    }
}

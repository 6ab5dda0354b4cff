//! Used-code registry capability.

use std::collections::HashSet;

use crate::code::LaunchCode;
use crate::types::CodeId;

/// Records launch codes that have already been used.
///
/// Membership is by identity ([`LaunchCode::id`]). The registry only grows.
pub trait UsedCodeRegistry: Send + Sync {
    /// Records a code as used. Adding the same code twice has no further
    /// effect on membership.
    fn add(&mut self, code: &dyn LaunchCode);

    /// Returns true if this exact code instance has been recorded.
    fn contains(&self, code: &dyn LaunchCode) -> bool;
}

/// In-memory registry keyed by code identity.
#[derive(Debug, Default)]
pub struct CodeRegistry {
    used: HashSet<CodeId>,
}

impl CodeRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of distinct codes recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }

    /// Returns true if no code has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }
}

impl UsedCodeRegistry for CodeRegistry {
    fn add(&mut self, code: &dyn LaunchCode) {
        if self.used.insert(code.id()) {
            tracing::debug!(code = %code.id(), "code recorded as used");
        }
    }

    fn contains(&self, code: &dyn LaunchCode) -> bool {
        self.used.contains(&code.id())
    }
}

//! Core value types shared by the rule, sessions and test doubles.

use serde::{Deserialize, Serialize};

/// Identity handle for an issued launch code.
///
/// Registry membership is decided by identity, not by the code's flags:
/// two codes with identical flags are still distinct codes. Each issued
/// code mints a fresh UUID, and the handle is what registries store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeId(uuid::Uuid);

impl CodeId {
    /// Creates a new random code ID.
    #[must_use]
    pub fn new() -> Self {
        Self(uuid::Uuid::new_v4())
    }
}

impl Default for CodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The single actuator action fired by one authorization attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// The irreversible positive action.
    Launch,
    /// The safing action ("code red abort").
    Disable,
}

impl Action {
    /// Returns true if this is a launch.
    #[must_use]
    pub const fn is_launch(&self) -> bool {
        matches!(self, Self::Launch)
    }

    /// Returns true if this is an abort.
    #[must_use]
    pub const fn is_abort(&self) -> bool {
        matches!(self, Self::Disable)
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Launch => write!(f, "launch"),
            Self::Disable => write!(f, "disable"),
        }
    }
}

//! Launch code capability.

use crate::types::CodeId;

/// A launch code presented for one authorization attempt.
///
/// Implementations must be pure: repeated queries on the same instance
/// return the same answers for the lifetime of an attempt.
pub trait LaunchCode: Send + Sync {
    /// Returns the identity handle of this code instance.
    ///
    /// Must return the same `CodeId` for the lifetime of the instance,
    /// distinct from every other instance.
    fn id(&self) -> CodeId;

    /// Returns true if the code has expired.
    fn is_expired(&self) -> bool;

    /// Returns true if the code carries no signature.
    ///
    /// Part of the capability contract; the authorization rule does not
    /// consult it.
    fn is_unsigned(&self) -> bool;
}

/// A launch code issued with fixed flags and a fresh identity.
///
/// Deliberately not `Clone`: a second `IssuedCode` with the same flags is a
/// different code.
#[derive(Debug)]
pub struct IssuedCode {
    id: CodeId,
    expired: bool,
    unsigned: bool,
}

impl IssuedCode {
    /// Issues a new code with the given flags.
    #[must_use]
    pub fn new(expired: bool, unsigned: bool) -> Self {
        Self {
            id: CodeId::new(),
            expired,
            unsigned,
        }
    }

    /// Issues a valid (non-expired, signed) code.
    #[must_use]
    pub fn valid() -> Self {
        Self::new(false, false)
    }

    /// Issues an expired, signed code.
    #[must_use]
    pub fn expired() -> Self {
        Self::new(true, false)
    }
}

impl LaunchCode for IssuedCode {
    fn id(&self) -> CodeId {
        self.id
    }

    fn is_expired(&self) -> bool {
        self.expired
    }

    fn is_unsigned(&self) -> bool {
        self.unsigned
    }
}

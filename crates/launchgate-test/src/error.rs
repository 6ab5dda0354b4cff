//! Test error types.

/// Result type alias for test-double verification.
pub type Result<T> = std::result::Result<T, TestError>;

/// Verification failures reported by mocks.
#[derive(Debug, thiserror::Error)]
pub enum TestError {
    /// Assertion failed.
    #[error("assertion failed: {0}")]
    Assertion(String),

    /// A mock's expectation was not met.
    #[error("expectation not met: expected {expected}, got {actual}")]
    Expectation {
        /// What the mock expected.
        expected: String,
        /// What actually happened.
        actual: String,
    },
}

impl TestError {
    /// Creates an assertion error.
    #[must_use]
    pub fn assertion(msg: impl Into<String>) -> Self {
        Self::Assertion(msg.into())
    }

    /// Creates an unmet expectation error.
    #[must_use]
    pub fn expectation(expected: impl Into<String>, actual: impl Into<String>) -> Self {
        Self::Expectation {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

// Allow unwrap/expect/panic in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # launchgate-test
//!
//! Test doubles for the launch authorization rule, one type per role:
//!
//! - **Dummy** ([`DummyRegistry`], [`DummyActuator`]): fails loudly if used
//! - **Stub** ([`ExpiredCodeStub`], [`ValidCodeStub`], [`RegistryStub`]): canned answers
//! - **Spy** ([`ActuatorSpy`], [`RegistrySpy`]): records calls for later assertion
//! - **Mock** ([`ActuatorMock`]): records calls and verifies its own expectation
//! - **Fake** ([`FakeRegistry`]): a working list-backed registry
//!
//! ## Example
//!
//! ```rust
//! use launchgate_core::AuthorizationRule;
//! use launchgate_test::{ActuatorMock, DummyRegistry, ExpiredCodeStub};
//!
//! let mock = ActuatorMock::new();
//! let code = ExpiredCodeStub::new();
//! AuthorizationRule::new(&mock, &code, &DummyRegistry::new()).execute();
//! assert!(mock.verify_code_red_abort().is_ok());
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod dummy;
pub mod error;
pub mod fake;
pub mod mock;
pub mod spy;
pub mod stub;

pub use dummy::{DummyActuator, DummyRegistry};
pub use error::{Result, TestError};
pub use fake::FakeRegistry;
pub use mock::ActuatorMock;
pub use spy::{ActuatorSpy, RegistrySpy};
pub use stub::{ExpiredCodeStub, RegistryStub, ValidCodeStub};

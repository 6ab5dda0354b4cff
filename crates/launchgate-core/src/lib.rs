// Allow unwrap/expect/panic in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # launchgate-core
//!
//! The launch authorization rule and the capabilities it drives.
//!
//! - [`LaunchCode`]: is the presented code expired / unsigned
//! - [`UsedCodeRegistry`]: has this exact code been used before
//! - [`Actuator`]: fire the launch, or safe the system
//! - [`AuthorizationRule`]: launch only for an unexpired, unused code
//!
//! Around the rule sit a [`LaunchSession`], which owns a registry across
//! attempts, and [`Drill`], which runs a scripted [`DrillConfig`].
//!
//! ## Example
//!
//! ```rust
//! use launchgate_core::{Action, AuthorizationRule, CodeRegistry, IssuedCode, TracingActuator};
//!
//! let actuator = TracingActuator::new();
//! let code = IssuedCode::valid();
//! let registry = CodeRegistry::new();
//!
//! let action = AuthorizationRule::new(&actuator, &code, &registry).execute();
//! assert_eq!(action, Action::Launch);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod actuator;
pub mod code;
pub mod config;
pub mod drill;
pub mod error;
pub mod registry;
pub mod rule;
pub mod session;
pub mod types;

pub use actuator::{Actuator, TracingActuator};
pub use code::{IssuedCode, LaunchCode};
pub use config::{CodeSpec, DrillConfig};
pub use drill::Drill;
pub use error::{LaunchError, Result};
pub use registry::{CodeRegistry, UsedCodeRegistry};
pub use rule::AuthorizationRule;
pub use session::{AttemptRecord, LaunchSession, RetirePolicy};
pub use types::{Action, CodeId};

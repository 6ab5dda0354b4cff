//! Launchgate: a launch authorization rule and its test doubles.
//!
//! # Quick Start
//!
//! ```rust
//! use launchgate::prelude::*;
//!
//! let actuator = TracingActuator::new();
//! let code = IssuedCode::expired();
//! let registry = CodeRegistry::new();
//!
//! assert_eq!(AuthorizationRule::new(&actuator, &code, &registry).execute(), Action::Disable);
//! ```

pub use launchgate_core as core;

/// Prelude module for common imports.
pub mod prelude {
    pub use launchgate_core::{
        Action, Actuator, AttemptRecord, AuthorizationRule, CodeId, CodeRegistry, Drill,
        DrillConfig, IssuedCode, LaunchCode, LaunchSession, RetirePolicy, TracingActuator,
        UsedCodeRegistry,
    };
}

//! Falsification Tests: Category B - Registry identity (F011-F020)

use launchgate_core::{
    Action, AuthorizationRule, CodeRegistry, IssuedCode, LaunchCode, UsedCodeRegistry,
};
use launchgate_test::{ActuatorSpy, FakeRegistry, ValidCodeStub};
use proptest::prelude::*;

/// F011: A twin code with identical flags is not "used"
///
/// # Falsification Attempt
/// Register one valid code, present a different one with the same flags.
#[test]
fn f011_twin_code_is_not_used() {
    let spy = ActuatorSpy::new();
    let used = ValidCodeStub::new();
    let twin = ValidCodeStub::new();
    let mut registry = CodeRegistry::new();
    registry.add(&used);

    let action = AuthorizationRule::new(&spy, &twin, &registry).execute();

    assert_eq!(
        action,
        Action::Launch,
        "F011 FALSIFIED: Registry matched by value instead of identity"
    );
}

/// F012: Adding a code twice keeps it used, and the fake keeps both entries
#[test]
fn f012_duplicate_add_is_tolerated() {
    let spy = ActuatorSpy::new();
    let code = ValidCodeStub::new();
    let mut registry = FakeRegistry::new();
    registry.add(&code);
    registry.add(&code);

    AuthorizationRule::new(&spy, &code, &registry).execute();

    assert_eq!(registry.len(), 2, "F012 FALSIFIED: Duplicate was dropped");
    assert!(
        !spy.launch_has_been_called(),
        "F012 FALSIFIED: Duplicated code launched"
    );
}

/// F013: The unsigned flag never influences the outcome
#[test]
fn f013_unsigned_flag_ignored() {
    for expired in [false, true] {
        let signed = IssuedCode::new(expired, false);
        let unsigned = IssuedCode::new(expired, true);
        let registry = CodeRegistry::new();

        let a = AuthorizationRule::new(&ActuatorSpy::new(), &signed, &registry).execute();
        let b = AuthorizationRule::new(&ActuatorSpy::new(), &unsigned, &registry).execute();

        assert!(unsigned.is_unsigned());
        assert_eq!(a, b, "F013 FALSIFIED: Unsigned flag changed the action");
    }
}

proptest! {
    /// F014: Exactly one action per attempt, across both registry kinds
    #[test]
    fn f014_exactly_one_action(expired in any::<bool>(), used in any::<bool>(), fake in any::<bool>()) {
        let spy = ActuatorSpy::new();
        let code = IssuedCode::new(expired, false);

        let action = if fake {
            let mut registry = FakeRegistry::new();
            if used {
                registry.add(&code);
            }
            AuthorizationRule::new(&spy, &code, &registry).execute()
        } else {
            let mut registry = CodeRegistry::new();
            if used {
                registry.add(&code);
            }
            AuthorizationRule::new(&spy, &code, &registry).execute()
        };

        prop_assert_eq!(spy.calls(), vec![action]);
        prop_assert_eq!(action == Action::Launch, !expired && !used);
    }

    /// F015: Unrelated registered codes never block a fresh code
    #[test]
    fn f015_unrelated_codes_do_not_block(others in 0usize..32) {
        let spy = ActuatorSpy::new();
        let mut registry = CodeRegistry::new();
        for _ in 0..others {
            registry.add(&IssuedCode::valid());
        }
        let code = IssuedCode::valid();

        let action = AuthorizationRule::new(&spy, &code, &registry).execute();
        prop_assert_eq!(action, Action::Launch);
    }
}

//! Falsification Tests: Category A - Abort and launch paths (F001-F010)

use launchgate_core::{
    Action, AuthorizationRule, CodeRegistry, IssuedCode, LaunchCode, UsedCodeRegistry,
};
use launchgate_test::{
    ActuatorMock, ActuatorSpy, DummyActuator, DummyRegistry, ExpiredCodeStub, FakeRegistry,
    RegistryStub, RegistrySpy, ValidCodeStub,
};

// =============================================================================
// F001-F004: The four canonical doubles
// =============================================================================

/// F001: An expired code never reaches `launch` (dummy actuator)
///
/// # Falsification Attempt
/// Launching on a dummy actuator panics; run an expired code through it.
#[test]
fn f001_expired_code_with_dummy_actuator() {
    let actuator = DummyActuator::new();
    let code = ExpiredCodeStub::new();

    AuthorizationRule::new(&actuator, &code, &DummyRegistry::new()).execute();

    assert!(
        actuator.disable_was_called(),
        "F001 FALSIFIED: Expired code did not disable"
    );
}

/// F002: An expired code does not launch (spy)
///
/// # Falsification Attempt
/// Record actuator calls and look for a launch.
#[test]
fn f002_expired_code_spy_sees_no_launch() {
    let spy = ActuatorSpy::new();
    let code = ExpiredCodeStub::new();

    AuthorizationRule::new(&spy, &code, &DummyRegistry::new()).execute();

    let verdict = spy.assert_never_launched();
    assert!(verdict.is_ok(), "F002 FALSIFIED: {:?}", verdict.err());
    assert!(
        !spy.launch_has_been_called(),
        "F002 FALSIFIED: Expired code launched"
    );
}

/// F003: An expired code results in a code red abort (mock)
///
/// # Falsification Attempt
/// Let the mock verify that only `disable` ran.
#[test]
fn f003_expired_code_mock_verifies_abort() {
    let mock = ActuatorMock::new();
    let code = ExpiredCodeStub::new();

    AuthorizationRule::new(&mock, &code, &DummyRegistry::new()).execute();

    let verdict = mock.verify_code_red_abort();
    assert!(verdict.is_ok(), "F003 FALSIFIED: {:?}", verdict.err());
}

/// F004: A previously used code results in a code red abort (mock + fake)
///
/// # Falsification Attempt
/// Register a valid code in a fake registry, then present the same code.
#[test]
fn f004_used_code_mock_verifies_abort() {
    let mock = ActuatorMock::new();
    let code = ValidCodeStub::new();
    let mut registry = FakeRegistry::new();
    registry.add(&code);

    AuthorizationRule::new(&mock, &code, &registry).execute();

    let verdict = mock.verify_code_red_abort();
    assert!(verdict.is_ok(), "F004 FALSIFIED: {:?}", verdict.err());
}

// =============================================================================
// F005-F010: Scenarios and short-circuit behaviour
// =============================================================================

/// F005: Scenario A - expired code, empty registry
#[test]
fn f005_expired_code_empty_registry_disables() {
    let spy = ActuatorSpy::new();
    let code = ExpiredCodeStub::new();
    let registry = CodeRegistry::new();

    let action = AuthorizationRule::new(&spy, &code, &registry).execute();

    assert_eq!(action, Action::Disable, "F005 FALSIFIED: Wrong action");
    assert_eq!(
        spy.calls(),
        vec![Action::Disable],
        "F005 FALSIFIED: Expected a single disable"
    );
}

/// F006: Scenario B - valid code, empty registry launches
#[test]
fn f006_valid_code_empty_registry_launches() {
    let mock = ActuatorMock::new();
    let code = ValidCodeStub::new();
    let registry = FakeRegistry::new();

    let action = AuthorizationRule::new(&mock, &code, &registry).execute();

    assert_eq!(action, Action::Launch, "F006 FALSIFIED: Wrong action");
    assert!(
        mock.verify_launched().is_ok(),
        "F006 FALSIFIED: Mock did not see exactly one launch"
    );
}

/// F007: Scenario D - the expired check short-circuits the registry
///
/// # Falsification Attempt
/// Spy on the registry and count `contains` calls for an expired code.
#[test]
fn f007_expired_code_never_queries_registry() {
    let spy = ActuatorSpy::new();
    let code = ExpiredCodeStub::new();
    let registry = RegistrySpy::new();

    AuthorizationRule::new(&spy, &code, &registry).execute();

    assert_eq!(
        registry.contains_count(),
        0,
        "F007 FALSIFIED: Registry consulted for an expired code"
    );
    assert_eq!(registry.add_count(), 0, "F007 FALSIFIED: Rule wrote to registry");
}

/// F008: A valid code is checked against the registry exactly once
#[test]
fn f008_valid_code_queries_registry_once() {
    let spy = ActuatorSpy::new();
    let code = ValidCodeStub::new();
    let registry = RegistrySpy::new();

    AuthorizationRule::new(&spy, &code, &registry).execute();

    assert_eq!(
        registry.contains_count(),
        1,
        "F008 FALSIFIED: Expected one membership query"
    );
    assert_eq!(registry.queried(), vec![code.id()]);
}

/// F009: A dummy registry fails loudly through the rule
///
/// # Falsification Attempt
/// Present a valid code, forcing a registry lookup on the dummy; the panic
/// must reach the caller rather than be swallowed.
#[test]
#[should_panic(expected = "not implemented: DummyRegistry::contains")]
fn f009_dummy_registry_panic_propagates() {
    let spy = ActuatorSpy::new();
    let code = ValidCodeStub::new();
    AuthorizationRule::new(&spy, &code, &DummyRegistry::new()).execute();
}

/// F010: A registry reporting "used" aborts even a valid code
#[test]
fn f010_stubbed_used_registry_disables_valid_code() {
    let mock = ActuatorMock::new();
    let code = ValidCodeStub::new();

    AuthorizationRule::new(&mock, &code, &RegistryStub::all_used()).execute();
    assert!(
        mock.verify_code_red_abort().is_ok(),
        "F010 FALSIFIED: Used code launched"
    );

    let mock = ActuatorMock::new();
    let fresh = IssuedCode::valid();
    AuthorizationRule::new(&mock, &fresh, &RegistryStub::none_used()).execute();
    assert!(
        mock.verify_launched().is_ok(),
        "F010 FALSIFIED: Unused code did not launch"
    );
}

use super::{Assertion, AssertionError, MESSAGE_FLAG, NEGATE_FLAG};
use crate::Value;

fn failure_message(result: Result<(), AssertionError>) -> String {
    match result.expect_err("assertion must fail") {
        AssertionError::Failed { message, .. } => message,
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn assert_passes_when_condition_matches_polarity() {
    let assertion = Assertion::new(Value::from(1));
    let expected = Value::from(2);
    assert!(assertion
        .assert(true, "yes", "no", &expected, assertion.object())
        .is_ok());

    let mut negated = Assertion::new(Value::from(1));
    negated.set_flag(NEGATE_FLAG, true);
    assert!(negated
        .assert(false, "yes", "no", &expected, negated.object())
        .is_ok());
}

#[test]
fn assert_renders_the_template_for_the_failing_polarity() {
    let assertion = Assertion::new(Value::from(1));
    let message = failure_message(assertion.assert(
        false,
        "expected {this} to be {exp} but was {act}",
        "unused",
        &Value::from(2),
        &Value::from("1"),
    ));
    assert_eq!(message, "expected 1 to be 2 but was '1'");

    let mut negated = Assertion::new(Value::from(1));
    negated.set_flag(NEGATE_FLAG, true);
    let message = failure_message(negated.assert(
        true,
        "unused",
        "expected {act} to differ from {exp}",
        &Value::from(1),
        &Value::from(1),
    ));
    assert_eq!(message, "expected 1 to differ from 1");
}

#[test]
fn custom_message_prefixes_failures() {
    let mut assertion = Assertion::new(Value::Null);
    assertion.set_flag(MESSAGE_FLAG, "balance");
    let message = failure_message(assertion.assert(
        false,
        "expected {this} to exist",
        "",
        &Value::Undefined,
        &Value::Null,
    ));
    assert_eq!(message, "balance: expected null to exist");

    let error = assertion.fail("plain");
    assert_eq!(error.to_string(), "balance: plain");
}

#[test]
fn flags_are_scoped_to_one_assertion() {
    let mut first = Assertion::new(Value::from(1));
    first.set_flag("custom", true);
    let second = Assertion::new(Value::from(1));
    assert!(first.flag_enabled("custom"));
    assert!(!second.flag_enabled("custom"));
    assert!(second.flag("custom").is_none());
}

#[test]
fn extension_errors_are_not_mismatches() {
    let error = AssertionError::extension(std::fmt::Error);
    assert!(!error.is_mismatch());
    assert!(error.downcast_extension::<std::fmt::Error>().is_some());
}

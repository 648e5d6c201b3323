use crate::assertion::{Assertion, AssertionError, NEGATE_FLAG};
use crate::host::{Args, Host, Method, Property};
use crate::value::Value;
use std::rc::Rc;

pub const LANGUAGE_CHAINS: &[&str] = &[
    "to", "be", "been", "is", "that", "which", "and", "has", "have", "with", "at", "of", "same",
    "but", "does",
];

pub const EQUAL_ALIASES: &[&str] = &["equal", "equals", "eq"];
pub const ABOVE_ALIASES: &[&str] = &["above", "gt", "greaterThan"];
pub const LEAST_ALIASES: &[&str] = &["least", "gte"];
pub const BELOW_ALIASES: &[&str] = &["below", "lt", "lessThan"];
pub const MOST_ALIASES: &[&str] = &["most", "lte"];
pub const CLOSE_TO_ALIASES: &[&str] = &["closeTo", "approximately"];

pub(crate) fn register(host: &mut Host) {
    let chain: Property = Rc::new(|_: &mut Assertion| -> Result<(), AssertionError> {
        Ok(())
    });
    for name in LANGUAGE_CHAINS {
        host.add_property(*name, chain.clone());
    }
    host.add_property(
        "not",
        Rc::new(|assertion: &mut Assertion| -> Result<(), AssertionError> {
            assertion.set_flag(NEGATE_FLAG, true);
            Ok(())
        }),
    );
    host.add_property("ok", Rc::new(assert_ok));
    for (name, expected) in [
        ("true", Value::Bool(true)),
        ("false", Value::Bool(false)),
        ("null", Value::Null),
        ("undefined", Value::Undefined),
    ] {
        host.add_property(
            name,
            Rc::new(move |assertion: &mut Assertion| assert_is(assertion, &expected)),
        );
    }

    register_aliases(host, EQUAL_ALIASES, Rc::new(assert_equal));
    register_aliases(host, ABOVE_ALIASES, Rc::new(assert_above));
    register_aliases(host, LEAST_ALIASES, Rc::new(assert_least));
    register_aliases(host, BELOW_ALIASES, Rc::new(assert_below));
    register_aliases(host, MOST_ALIASES, Rc::new(assert_most));
    register_aliases(host, CLOSE_TO_ALIASES, Rc::new(assert_close_to));
}

fn register_aliases(host: &mut Host, names: &[&str], method: Method) {
    for name in names {
        host.add_method(*name, method.clone());
    }
}

fn assert_ok(assertion: &mut Assertion) -> Result<(), AssertionError> {
    let truthy = assertion.object().is_truthy();
    assertion.assert(
        truthy,
        "expected {this} to be truthy",
        "expected {this} to be falsy",
        &Value::Bool(true),
        assertion.object(),
    )
}

fn assert_is(assertion: &mut Assertion, expected: &Value) -> Result<(), AssertionError> {
    let holds = assertion.object().strict_equals(expected);
    let when_true = format!("expected {{this}} to be {expected}");
    let when_false = format!("expected {{this}} to not be {expected}");
    assertion.assert(holds, &when_true, &when_false, expected, assertion.object())
}

fn assert_equal(assertion: &mut Assertion, args: &Args) -> Result<(), AssertionError> {
    let expected = &args.require("equal", 1)?[0];
    let holds = assertion.object().strict_equals(expected);
    assertion.assert(
        holds,
        "expected {this} to equal {exp}",
        "expected {this} to not equal {exp}",
        expected,
        assertion.object(),
    )
}

fn assert_above(assertion: &mut Assertion, args: &Args) -> Result<(), AssertionError> {
    let expected = &args.require("above", 1)?[0];
    let (actual, bound) = numeric_operands(assertion, "above", expected)?;
    assertion.assert(
        actual > bound,
        "expected {this} to be above {exp}",
        "expected {this} to be at most {exp}",
        expected,
        assertion.object(),
    )
}

fn assert_least(assertion: &mut Assertion, args: &Args) -> Result<(), AssertionError> {
    let expected = &args.require("least", 1)?[0];
    let (actual, bound) = numeric_operands(assertion, "least", expected)?;
    assertion.assert(
        actual >= bound,
        "expected {this} to be at least {exp}",
        "expected {this} to be below {exp}",
        expected,
        assertion.object(),
    )
}

fn assert_below(assertion: &mut Assertion, args: &Args) -> Result<(), AssertionError> {
    let expected = &args.require("below", 1)?[0];
    let (actual, bound) = numeric_operands(assertion, "below", expected)?;
    assertion.assert(
        actual < bound,
        "expected {this} to be below {exp}",
        "expected {this} to be at least {exp}",
        expected,
        assertion.object(),
    )
}

fn assert_most(assertion: &mut Assertion, args: &Args) -> Result<(), AssertionError> {
    let expected = &args.require("most", 1)?[0];
    let (actual, bound) = numeric_operands(assertion, "most", expected)?;
    assertion.assert(
        actual <= bound,
        "expected {this} to be at most {exp}",
        "expected {this} to be above {exp}",
        expected,
        assertion.object(),
    )
}

fn assert_close_to(assertion: &mut Assertion, args: &Args) -> Result<(), AssertionError> {
    let operands = args.require("closeTo", 2)?;
    let (Some(actual), Some(expected), Some(delta)) = (
        assertion.object().as_number(),
        operands[0].as_number(),
        operands[1].as_number(),
    ) else {
        return Err(assertion.fail("the arguments to closeTo or approximately must be numbers"));
    };
    let (target, tolerance) = (&operands[0], &operands[1]);
    let when_true = format!("expected {{this}} to be close to {target} +/- {tolerance}");
    let when_false = format!("expected {{this}} not to be close to {target} +/- {tolerance}");
    assertion.assert(
        (actual - expected).abs() <= delta,
        &when_true,
        &when_false,
        target,
        assertion.object(),
    )
}

fn numeric_operands(
    assertion: &Assertion,
    method: &str,
    expected: &Value,
) -> Result<(f64, f64), AssertionError> {
    let Some(actual) = assertion.object().as_number() else {
        return Err(assertion.fail(format!(
            "expected {} to be a number or a date",
            assertion.object()
        )));
    };
    let Some(bound) = expected.as_number() else {
        return Err(assertion.fail(format!("the argument to {method} must be a number")));
    };
    Ok((actual, bound))
}

#[cfg(test)]
#[path = "builtins_test.rs"]
mod tests;

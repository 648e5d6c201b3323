use crate::bignumber::BigNumber;
use std::borrow::Cow;

/// Result of a decimal comparison, ready for `Assertion::assert`.
#[derive(Debug, Clone)]
pub struct Comparison {
    pub holds: bool,
    pub when_true: Cow<'static, str>,
    pub when_false: Cow<'static, str>,
    pub expected: BigNumber,
}

/// Aliases sharing one decimal predicate. `evaluate` receives exactly
/// `arity` normalized operands.
pub struct ComparisonFamily {
    pub aliases: &'static [&'static str],
    pub arity: usize,
    pub evaluate: fn(&BigNumber, &[BigNumber]) -> Comparison,
}

pub struct ClassificationCheck {
    pub name: &'static str,
    pub holds: fn(&BigNumber) -> bool,
    pub when_true: &'static str,
    pub when_false: &'static str,
}

pub const COMPARISON_FAMILIES: &[ComparisonFamily] = &[
    ComparisonFamily {
        aliases: &["equal", "equals", "eq"],
        arity: 1,
        evaluate: equal,
    },
    ComparisonFamily {
        aliases: &["above", "gt", "greaterThan"],
        arity: 1,
        evaluate: above,
    },
    ComparisonFamily {
        aliases: &["least", "gte"],
        arity: 1,
        evaluate: least,
    },
    ComparisonFamily {
        aliases: &["below", "lt", "lessThan"],
        arity: 1,
        evaluate: below,
    },
    ComparisonFamily {
        aliases: &["most", "lte"],
        arity: 1,
        evaluate: most,
    },
    ComparisonFamily {
        aliases: &["closeTo", "approximately"],
        arity: 2,
        evaluate: close_to,
    },
];

pub const CLASSIFICATION_CHECKS: &[ClassificationCheck] = &[
    ClassificationCheck {
        name: "finite",
        holds: BigNumber::is_finite,
        when_true: "expected {this} to be finite",
        when_false: "expected {this} to not be finite",
    },
    ClassificationCheck {
        name: "negative",
        holds: BigNumber::is_negative,
        when_true: "expected {this} to be negative",
        when_false: "expected {this} to not be negative",
    },
    ClassificationCheck {
        name: "integer",
        holds: BigNumber::is_integer,
        when_true: "expected {this} to be an integer",
        when_false: "expected {this} to not be an integer",
    },
    ClassificationCheck {
        name: "zero",
        holds: BigNumber::is_zero,
        when_true: "expected {this} to be zero",
        when_false: "expected {this} to not be zero",
    },
];

pub fn family(alias: &str) -> Option<&'static ComparisonFamily> {
    COMPARISON_FAMILIES
        .iter()
        .find(|family| family.aliases.iter().any(|name| *name == alias))
}

fn ordering(
    holds: bool,
    expected: &BigNumber,
    when_true: &'static str,
    when_false: &'static str,
) -> Comparison {
    Comparison {
        holds,
        when_true: Cow::Borrowed(when_true),
        when_false: Cow::Borrowed(when_false),
        expected: expected.clone(),
    }
}

fn equal(actual: &BigNumber, operands: &[BigNumber]) -> Comparison {
    let expected = &operands[0];
    ordering(
        actual == expected,
        expected,
        "expected {act} to equal {exp}",
        "expected {act} to be different from {exp}",
    )
}

fn above(actual: &BigNumber, operands: &[BigNumber]) -> Comparison {
    let expected = &operands[0];
    ordering(
        actual > expected,
        expected,
        "expected {act} to be greater than {exp}",
        "expected {act} to be less than or equal to {exp}",
    )
}

fn least(actual: &BigNumber, operands: &[BigNumber]) -> Comparison {
    let expected = &operands[0];
    ordering(
        actual >= expected,
        expected,
        "expected {act} to be greater than or equal to {exp}",
        "expected {act} to be less than {exp}",
    )
}

fn below(actual: &BigNumber, operands: &[BigNumber]) -> Comparison {
    let expected = &operands[0];
    ordering(
        actual < expected,
        expected,
        "expected {act} to be less than {exp}",
        "expected {act} to be greater than or equal to {exp}",
    )
}

fn most(actual: &BigNumber, operands: &[BigNumber]) -> Comparison {
    let expected = &operands[0];
    ordering(
        actual <= expected,
        expected,
        "expected {act} to be less than or equal to {exp}",
        "expected {act} to be greater than {exp}",
    )
}

// A negative delta gives an empty window: lower > upper, so nothing fits.
fn close_to(actual: &BigNumber, operands: &[BigNumber]) -> Comparison {
    let (expected, delta) = (&operands[0], &operands[1]);
    let lower = expected.minus(delta);
    let upper = expected.plus(delta);
    Comparison {
        holds: *actual >= lower && *actual <= upper,
        when_true: Cow::Owned(format!("expected {{act}} to be within '{delta}' of {{exp}}")),
        when_false: Cow::Owned(format!(
            "expected {{act}} to be further than '{delta}' from {{exp}}"
        )),
        expected: expected.clone(),
    }
}

#[cfg(test)]
#[path = "predicates_test.rs"]
mod tests;

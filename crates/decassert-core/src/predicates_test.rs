use super::{family, CLASSIFICATION_CHECKS, COMPARISON_FAMILIES};
use crate::BigNumber;

fn big(raw: &str) -> BigNumber {
    BigNumber::parse(raw).expect("parse")
}

fn holds(alias: &str, actual: &str, operands: &[&str]) -> bool {
    let family = family(alias).expect("known alias");
    let operands = operands.iter().map(|raw| big(raw)).collect::<Vec<_>>();
    (family.evaluate)(&big(actual), &operands).holds
}

#[test]
fn every_alias_resolves_to_exactly_one_family() {
    let mut seen = Vec::new();
    for family in COMPARISON_FAMILIES {
        for alias in family.aliases {
            assert!(!seen.contains(alias), "duplicate alias {alias}");
            seen.push(*alias);
        }
    }
    assert_eq!(seen.len(), 15);
    assert!(family("closeTo").is_some());
    assert!(family("within").is_none());
}

#[test]
fn ordering_predicates_agree_with_decimal_ordering() {
    assert!(holds("gt", "10.6", &["10"]));
    assert!(!holds("gt", "10", &["10"]));
    assert!(holds("gte", "10", &["10"]));
    assert!(holds("lt", "1.000000000000000001", &["1.000000000000000002"]));
    assert!(holds("lte", "1e20", &["100000000000000000000"]));
    assert!(holds("eq", "10.50", &["10.5"]));
    assert!(!holds("eq", "NaN", &["NaN"]));
}

#[test]
fn close_to_is_inclusive_at_both_bounds() {
    assert!(holds("closeTo", "5", &["10", "5"]));
    assert!(holds("closeTo", "15", &["10", "5"]));
    assert!(!holds("closeTo", "5", &["10.0001", "5"]));
    assert!(holds("approximately", "1.1", &["5", "5"]));
}

#[test]
fn negative_delta_is_an_empty_window() {
    assert!(!holds("closeTo", "10", &["10", "-1"]));
    assert!(holds("closeTo", "10", &["10", "0"]));
}

#[test]
fn close_to_messages_carry_the_delta() {
    let family = family("closeTo").expect("known alias");
    let comparison = (family.evaluate)(&big("1"), &[big("100"), big("5")]);
    assert_eq!(comparison.when_true, "expected {act} to be within '5' of {exp}");
    assert_eq!(comparison.when_false, "expected {act} to be further than '5' from {exp}");
    assert_eq!(comparison.expected, big("100"));
}

#[test]
fn classification_checks_cover_the_four_queries() {
    let names = CLASSIFICATION_CHECKS
        .iter()
        .map(|check| check.name)
        .collect::<Vec<_>>();
    assert_eq!(names, ["finite", "negative", "integer", "zero"]);
    let zero = CLASSIFICATION_CHECKS
        .iter()
        .find(|check| check.name == "zero")
        .expect("zero check");
    assert!((zero.holds)(&big("0")));
    assert!(!(zero.holds)(&big("NaN")));
}

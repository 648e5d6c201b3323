use super::{Decimal, NumericError};
use num_bigint::BigInt;

#[test]
fn parse_and_normalize_decimal() {
    let value = Decimal::parse("12.3400").expect("parse");
    assert_eq!(value.mantissa(), &BigInt::from(1234u64));
    assert_eq!(value.scale(), 2);
    assert_eq!(value.to_string(), "12.34");
}

#[test]
fn parse_accepts_scientific_and_partial_forms() {
    assert_eq!(Decimal::parse("1e21").expect("parse").to_string(), "1000000000000000000000");
    assert_eq!(Decimal::parse("1.5E-3").expect("parse").to_string(), "0.0015");
    assert_eq!(Decimal::parse(".5").expect("parse").to_string(), "0.5");
    assert_eq!(Decimal::parse("5.").expect("parse").to_string(), "5");
    assert_eq!(Decimal::parse(" +42 ").expect("parse").to_string(), "42");
    assert_eq!(Decimal::parse("-0.000").expect("parse"), Decimal::zero());
}

#[test]
fn parse_keeps_precision_beyond_native_floats() {
    let left = Decimal::parse("1.000000000000000001").expect("parse");
    let right = Decimal::parse("1.000000000000000002").expect("parse");
    assert_ne!(left, right);
    assert!(left < right);
}

#[test]
fn parse_rejects_non_numeric_literals() {
    for input in ["", "abc", "1.2.3", "0x10", "1e", "--1", "١٢"] {
        let err = Decimal::parse(input).expect_err("must fail");
        assert_eq!(err, NumericError::InvalidDecimalLiteral(input.to_string()));
    }
}

#[test]
fn parse_reports_exponent_range_errors() {
    assert!(matches!(
        Decimal::parse("1e99999999999999999999"),
        Err(NumericError::ExponentOverflow(_))
    ));
    assert!(matches!(
        Decimal::parse("1e-99999999999999999999"),
        Err(NumericError::ExponentUnderflow(_))
    ));
    assert_eq!(Decimal::parse("0e99999999999999999999").expect("zero"), Decimal::zero());

    for input in ["10e9223372036854775807", "100e9223372036854775807", "1e10000001"] {
        let err = Decimal::parse(input).expect_err("must fail");
        assert_eq!(err, NumericError::ExponentOverflow(input.to_string()));
    }
    for input in [
        "0.5e-9223372036854775807",
        "1e-9223372036854775808",
        "0.00001e-9999996",
    ] {
        let err = Decimal::parse(input).expect_err("must fail");
        assert_eq!(err, NumericError::ExponentUnderflow(input.to_string()));
    }
    // Fraction digits move the leading digit back into range.
    assert_eq!(Decimal::parse("0.001e10000002").expect("parse").exponent(), 9_999_999);
    assert_eq!(Decimal::parse("1e10000000").expect("parse").exponent(), 10_000_000);
}

#[test]
fn extreme_scales_do_not_overflow() {
    let huge = Decimal::from_bigint_with_scale(BigInt::from(100u8), i64::MIN + 1);
    assert_eq!(huge.scale(), i64::MIN);
    assert_eq!(huge.exponent(), i64::MAX);

    let tiny = Decimal::from_bigint_with_scale(BigInt::from(1u8), i64::MAX);
    assert_eq!(tiny.exponent(), -i64::MAX);
    assert!(tiny < Decimal::from_int(1));
}

#[test]
fn add_and_sub_align_scales() {
    let left = Decimal::parse("1.2").expect("parse");
    let right = Decimal::parse("0.03").expect("parse");
    assert_eq!(left.add(&right).to_string(), "1.23");
    assert_eq!(right.sub(&left).to_string(), "-1.17");
    assert_eq!(left.sub(&left), Decimal::zero());
}

#[test]
fn ordering_handles_signs_and_magnitudes() {
    let values = ["-100", "-1.5", "0", "0.001", "1", "1.0000001", "1e20"]
        .map(|raw| Decimal::parse(raw).expect("parse"));
    for window in values.windows(2) {
        assert!(window[0] < window[1], "{} < {}", window[0], window[1]);
    }
    assert!(Decimal::parse("1e9000000").expect("parse") > Decimal::parse("9e-9000000").expect("parse"));
}

#[test]
fn classification_and_exponent() {
    let value = Decimal::parse("123.4").expect("parse");
    assert_eq!(value.exponent(), 2);
    assert!(!value.is_integer());
    assert!(Decimal::parse("1e3").expect("parse").is_integer());
    assert_eq!(Decimal::parse("0.00012").expect("parse").exponent(), -4);
    assert!(Decimal::from_int(-3).is_negative());
    assert!(Decimal::zero().is_zero());
}

#[test]
fn rounded_division() {
    let one = Decimal::from_int(1);
    let three = Decimal::from_int(3);
    assert_eq!(one.div_rounded(&three, 5).expect("div").to_string(), "0.33333");
    assert_eq!(
        Decimal::from_int(2).div_rounded(&three, 5).expect("div").to_string(),
        "0.66667"
    );
    assert_eq!(
        Decimal::from_int(-2).div_rounded(&three, 5).expect("div").to_string(),
        "-0.66667"
    );
    assert_eq!(
        Decimal::from_int(10).div_rounded(&Decimal::new(25, 1), 20).expect("div").to_string(),
        "4"
    );
    let err = one.div_rounded(&Decimal::zero(), 20).expect_err("must fail");
    assert_eq!(err, NumericError::DivisionByZero);
}

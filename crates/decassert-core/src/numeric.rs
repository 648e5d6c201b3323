use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use regex::Regex;
use std::cmp::Ordering;
use std::str::FromStr;
use std::sync::OnceLock;

/// Decimal exponents beyond these bounds overflow to infinity or underflow to
/// zero.
pub const MAX_EXPONENT: i64 = 10_000_000;
pub const MIN_EXPONENT: i64 = -10_000_000;

const NUMERIC_LITERAL_PATTERN: &str =
    r"^([+-])?(?:([0-9]+)(?:\.([0-9]*))?|\.([0-9]+))(?:[eE]([+-]?[0-9]+))?$";

/// An exact decimal `mantissa × 10^-scale`, kept with trailing zeros stripped
/// so that structural equality is numeric equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decimal {
    mantissa: BigInt,
    scale: i64,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NumericError {
    #[error("invalid decimal literal: {0}")]
    InvalidDecimalLiteral(String),
    #[error("exponent too large: {0}")]
    ExponentOverflow(String),
    #[error("exponent too small: {0}")]
    ExponentUnderflow(String),
    #[error("division by zero")]
    DivisionByZero,
}

impl Decimal {
    pub fn new(int: i128, scale: i64) -> Self {
        Self::from_bigint_with_scale(BigInt::from(int), scale)
    }

    pub fn from_int(value: i128) -> Self {
        Self::from_bigint_with_scale(BigInt::from(value), 0)
    }

    pub fn zero() -> Self {
        Self {
            mantissa: BigInt::zero(),
            scale: 0,
        }
    }

    /// Parses a finite literal: optional sign, integer and/or fraction digits,
    /// optional exponent. Surrounding whitespace is ignored. Literals whose
    /// leading digit sits outside [`MIN_EXPONENT`, `MAX_EXPONENT`] are range
    /// errors, decided by the direction of that exponent.
    pub fn parse(input: &str) -> Result<Self, NumericError> {
        let trimmed = input.trim();
        let captures = literal_pattern()
            .captures(trimmed)
            .ok_or_else(|| NumericError::InvalidDecimalLiteral(input.to_string()))?;

        let negative = captures.get(1).map(|sign| sign.as_str()) == Some("-");
        let (int_digits, frac_digits) = match captures.get(4) {
            Some(frac) => ("", frac.as_str()),
            None => (
                captures.get(2).map_or("", |digits| digits.as_str()),
                captures.get(3).map_or("", |digits| digits.as_str()),
            ),
        };
        let digits = format!("{int_digits}{frac_digits}");
        let mantissa = BigInt::from_str(digits.as_str())
            .map_err(|_| NumericError::InvalidDecimalLiteral(input.to_string()))?;
        if mantissa.is_zero() {
            return Ok(Self::zero());
        }

        let exponent = match captures.get(5) {
            Some(raw) => raw.as_str().parse::<i64>().map_err(|_| {
                if raw.as_str().starts_with('-') {
                    NumericError::ExponentUnderflow(input.to_string())
                } else {
                    NumericError::ExponentOverflow(input.to_string())
                }
            })?,
            None => 0,
        };
        // i128 holds every i64 exponent plus any digit count without overflow.
        let scale = frac_digits.len() as i128 - i128::from(exponent);
        let significant = digits.trim_start_matches('0').len() as i128;
        let adjusted = significant - 1 - scale;
        if adjusted > i128::from(MAX_EXPONENT) {
            return Err(NumericError::ExponentOverflow(input.to_string()));
        }
        if adjusted < i128::from(MIN_EXPONENT) {
            return Err(NumericError::ExponentUnderflow(input.to_string()));
        }
        let scale = i64::try_from(scale)
            .map_err(|_| NumericError::ExponentOverflow(input.to_string()))?;

        let mantissa = if negative { -mantissa } else { mantissa };
        Ok(Self::from_bigdecimal(BigDecimal::new(mantissa, scale)))
    }

    pub fn add(&self, other: &Decimal) -> Decimal {
        let (left, right, scale) = align(self, other);
        Self::normalize(left + right, scale)
    }

    pub fn sub(&self, other: &Decimal) -> Decimal {
        let (left, right, scale) = align(self, other);
        Self::normalize(left - right, scale)
    }

    /// Quotient rounded half away from zero to `places` fractional digits.
    pub fn div_rounded(&self, other: &Decimal, places: u32) -> Result<Decimal, NumericError> {
        if other.mantissa.is_zero() {
            return Err(NumericError::DivisionByZero);
        }
        // self / other × 10^places = m1 × 10^(places - s1 + s2) / m2
        let shift = i128::from(places) - i128::from(self.scale) + i128::from(other.scale);
        let magnitude = u64::try_from(shift.unsigned_abs())
            .map_err(|_| NumericError::ExponentOverflow(format!("{self} / {other}")))?;
        let (numerator, denominator) = if shift >= 0 {
            (&self.mantissa * pow10(magnitude), other.mantissa.clone())
        } else {
            (self.mantissa.clone(), &other.mantissa * pow10(magnitude))
        };

        let quotient = &numerator / &denominator;
        let remainder = &numerator % &denominator;
        let mut rounded = quotient;
        if remainder.abs() * 2u8 >= denominator.abs() {
            let away = if numerator.sign() == denominator.sign() {
                BigInt::from(1u8)
            } else {
                BigInt::from(-1)
            };
            rounded += away;
        }
        Ok(Self::normalize(rounded, i64::from(places)))
    }

    pub fn scale(&self) -> i64 {
        self.scale
    }

    pub fn mantissa(&self) -> &BigInt {
        &self.mantissa
    }

    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.mantissa.sign() == Sign::Minus
    }

    pub fn is_integer(&self) -> bool {
        self.scale <= 0
    }

    pub fn abs(&self) -> Self {
        Self {
            mantissa: self.mantissa.clone().abs(),
            scale: self.scale,
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            mantissa: -self.mantissa.clone(),
            scale: self.scale,
        }
    }

    /// Decimal exponent of the most significant digit, `2` for `123.4`.
    /// Zero reports `0`. Saturates at the `i64` bounds.
    pub fn exponent(&self) -> i64 {
        if self.mantissa.is_zero() {
            return 0;
        }
        let exponent = self.digits().len() as i128 - 1 - i128::from(self.scale);
        i64::try_from(exponent).unwrap_or(if exponent > 0 { i64::MAX } else { i64::MIN })
    }

    /// Significant digits of the absolute value, without trailing zeros.
    pub fn digits(&self) -> String {
        self.mantissa.magnitude().to_string()
    }

    pub fn from_bigint_with_scale(value: BigInt, scale: i64) -> Self {
        Self::normalize(value, scale)
    }

    pub fn from_bigdecimal(value: BigDecimal) -> Self {
        let (mantissa, scale) = value.into_bigint_and_exponent();
        Self::normalize(mantissa, scale)
    }

    pub fn to_bigdecimal(&self) -> BigDecimal {
        BigDecimal::new(self.mantissa.clone(), self.scale)
    }

    fn normalize(mantissa: BigInt, scale: i64) -> Self {
        if mantissa.is_zero() {
            return Self::zero();
        }
        let mut normalized_mantissa = mantissa;
        let mut normalized_scale = scale;
        while normalized_scale > i64::MIN && (&normalized_mantissa % 10u8).is_zero() {
            normalized_mantissa /= 10u8;
            normalized_scale -= 1;
        }
        Self {
            mantissa: normalized_mantissa,
            scale: normalized_scale,
        }
    }
}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        let by_sign = self.mantissa.sign().cmp(&other.mantissa.sign());
        if by_sign != Ordering::Equal || self.mantissa.is_zero() {
            return by_sign;
        }
        // Same sign and non-zero: magnitudes first, so operands far apart are
        // never scaled to a common exponent.
        let by_magnitude = match self.exponent().cmp(&other.exponent()) {
            Ordering::Equal => {
                let (left, right, _) = align(&self.abs(), &other.abs());
                left.cmp(&right)
            }
            unequal => unequal,
        };
        if self.is_negative() {
            by_magnitude.reverse()
        } else {
            by_magnitude
        }
    }
}

impl From<i128> for Decimal {
    fn from(value: i128) -> Self {
        Self::from_int(value)
    }
}

impl From<&BigInt> for Decimal {
    fn from(value: &BigInt) -> Self {
        Self::from_bigint_with_scale(value.clone(), 0)
    }
}

impl FromStr for Decimal {
    type Err = NumericError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.mantissa.is_zero() {
            return write!(f, "0");
        }
        let sign = if self.is_negative() { "-" } else { "" };
        let abs_digits = self.digits();
        if self.scale <= 0 {
            let zeros = "0".repeat(self.scale.unsigned_abs() as usize);
            return write!(f, "{sign}{abs_digits}{zeros}");
        }
        let scale = self.scale as usize;
        if abs_digits.len() <= scale {
            let zeros = "0".repeat(scale - abs_digits.len());
            write!(f, "{sign}0.{zeros}{abs_digits}")
        } else {
            let split = abs_digits.len() - scale;
            write!(f, "{sign}{}.{}", &abs_digits[..split], &abs_digits[split..])
        }
    }
}

fn literal_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(NUMERIC_LITERAL_PATTERN).expect("valid regex"))
}

fn align(left: &Decimal, right: &Decimal) -> (BigInt, BigInt, i64) {
    let scale = left.scale.max(right.scale);
    let left_mantissa = &left.mantissa * pow10(scale.abs_diff(left.scale));
    let right_mantissa = &right.mantissa * pow10(scale.abs_diff(right.scale));
    (left_mantissa, right_mantissa, scale)
}

fn pow10(power: u64) -> BigInt {
    num_traits::pow(BigInt::from(10u8), power as usize)
}

#[cfg(test)]
#[path = "numeric_test.rs"]
mod tests;

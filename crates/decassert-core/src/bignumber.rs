pub use crate::numeric::{MAX_EXPONENT, MIN_EXPONENT};

use crate::numeric::{Decimal, NumericError};
use decassert_host::{OpaqueValue, Value};
use std::any::Any;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

pub const BIG_NUMBER_TYPE_NAME: &str = "BigNumber";

/// Fractional digits kept by [`BigNumber::divided_by`].
pub const DIVISION_PLACES: u32 = 20;

// Rendering switches to exponential notation outside [-7, 20].
const EXPONENTIAL_AT_NEGATIVE: i64 = -7;
const EXPONENTIAL_AT_POSITIVE: i64 = 21;

/// Canonical arbitrary-precision decimal: an exact finite value or one of the
/// non-finite sentinels. Comparisons involving `NaN` are always false.
#[derive(Debug, Clone)]
pub enum BigNumber {
    Finite(Decimal),
    PositiveInfinity,
    NegativeInfinity,
    NaN,
}

impl BigNumber {
    pub fn nan() -> Self {
        Self::NaN
    }

    pub fn infinity(negative: bool) -> Self {
        if negative {
            Self::NegativeInfinity
        } else {
            Self::PositiveInfinity
        }
    }

    pub fn zero() -> Self {
        Self::Finite(Decimal::zero())
    }

    pub fn from_decimal(value: Decimal) -> Self {
        if value.is_zero() {
            return Self::Finite(value);
        }
        let exponent = value.exponent();
        if exponent > MAX_EXPONENT {
            Self::infinity(value.is_negative())
        } else if exponent < MIN_EXPONENT {
            Self::zero()
        } else {
            Self::Finite(value)
        }
    }

    /// Exact conversion of the shortest representation that round-trips the
    /// float, so `0.1` becomes `0.1` and `100e18` becomes `100000000000000000000`.
    pub fn from_f64(value: f64) -> Self {
        if value.is_nan() {
            return Self::NaN;
        }
        if value.is_infinite() {
            return Self::infinity(value < 0.0);
        }
        Decimal::parse(value.to_string().as_str())
            .map(Self::from_decimal)
            .unwrap_or(Self::NaN)
    }

    /// Accepts finite literals plus `NaN`, `Infinity` and `-Infinity`.
    pub fn parse(input: &str) -> Result<Self, NumericError> {
        let trimmed = input.trim();
        // One leading `+` is allowed, so `+-Infinity` is not numeric.
        let unsigned = match trimmed.strip_prefix('+') {
            Some(rest) if !rest.starts_with(['+', '-']) => rest,
            _ => trimmed,
        };
        match unsigned {
            "NaN" => return Ok(Self::NaN),
            "Infinity" => return Ok(Self::PositiveInfinity),
            "-Infinity" => return Ok(Self::NegativeInfinity),
            _ => {}
        }
        match Decimal::parse(trimmed) {
            Ok(value) => Ok(Self::from_decimal(value)),
            Err(NumericError::ExponentOverflow(_)) => {
                Ok(Self::infinity(trimmed.starts_with('-')))
            }
            Err(NumericError::ExponentUnderflow(_)) => Ok(Self::zero()),
            Err(err) => Err(err),
        }
    }

    /// Like [`BigNumber::parse`] but maps anything unparsable to `NaN`.
    pub fn parse_lossy(input: &str) -> Self {
        Self::parse(input).unwrap_or(Self::NaN)
    }

    pub fn as_decimal(&self) -> Option<&Decimal> {
        match self {
            Self::Finite(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Self::NaN)
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Self::Finite(_))
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Self::Finite(value) if value.is_integer())
    }

    pub fn is_negative(&self) -> bool {
        match self {
            Self::Finite(value) => value.is_negative(),
            Self::NegativeInfinity => true,
            Self::PositiveInfinity | Self::NaN => false,
        }
    }

    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Finite(value) if value.is_zero())
    }

    pub fn negated(&self) -> Self {
        match self {
            Self::Finite(value) => Self::Finite(value.neg()),
            Self::PositiveInfinity => Self::NegativeInfinity,
            Self::NegativeInfinity => Self::PositiveInfinity,
            Self::NaN => Self::NaN,
        }
    }

    pub fn abs(&self) -> Self {
        match self {
            Self::Finite(value) => Self::Finite(value.abs()),
            Self::PositiveInfinity | Self::NegativeInfinity => Self::PositiveInfinity,
            Self::NaN => Self::NaN,
        }
    }

    pub fn plus(&self, other: &BigNumber) -> BigNumber {
        match (self, other) {
            (Self::NaN, _) | (_, Self::NaN) => Self::NaN,
            (Self::PositiveInfinity, Self::NegativeInfinity)
            | (Self::NegativeInfinity, Self::PositiveInfinity) => Self::NaN,
            (Self::PositiveInfinity, _) | (_, Self::PositiveInfinity) => Self::PositiveInfinity,
            (Self::NegativeInfinity, _) | (_, Self::NegativeInfinity) => Self::NegativeInfinity,
            (Self::Finite(left), Self::Finite(right)) => Self::from_decimal(left.add(right)),
        }
    }

    pub fn minus(&self, other: &BigNumber) -> BigNumber {
        self.plus(&other.negated())
    }

    /// Division rounded to [`DIVISION_PLACES`] fractional digits. Dividing a
    /// non-zero value by zero gives an infinity, `0 / 0` gives `NaN`.
    pub fn divided_by(&self, other: &BigNumber) -> BigNumber {
        match (self, other) {
            (Self::NaN, _) | (_, Self::NaN) => Self::NaN,
            (Self::Finite(_), Self::Finite(_)) if other.is_zero() => {
                if self.is_zero() {
                    Self::NaN
                } else {
                    Self::infinity(self.is_negative())
                }
            }
            (Self::Finite(left), Self::Finite(right)) => left
                .div_rounded(right, DIVISION_PLACES)
                .map(Self::from_decimal)
                .unwrap_or(Self::NaN),
            (Self::Finite(_), _) => Self::zero(),
            (_, Self::Finite(_)) => Self::infinity(self.is_negative() != other.is_negative()),
            _ => Self::NaN,
        }
    }

    fn rank(&self) -> Option<i8> {
        match self {
            Self::NegativeInfinity => Some(-1),
            Self::Finite(_) => Some(0),
            Self::PositiveInfinity => Some(1),
            Self::NaN => None,
        }
    }
}

impl PartialEq for BigNumber {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for BigNumber {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Finite(left), Self::Finite(right)) => Some(left.cmp(right)),
            _ => Some(self.rank()?.cmp(&other.rank()?)),
        }
    }
}

impl FromStr for BigNumber {
    type Err = NumericError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

impl From<Decimal> for BigNumber {
    fn from(value: Decimal) -> Self {
        Self::from_decimal(value)
    }
}

impl From<f64> for BigNumber {
    fn from(value: f64) -> Self {
        Self::from_f64(value)
    }
}

impl From<i64> for BigNumber {
    fn from(value: i64) -> Self {
        Self::from_decimal(Decimal::from_int(i128::from(value)))
    }
}

impl fmt::Display for BigNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Self::NaN => return write!(f, "NaN"),
            Self::PositiveInfinity => return write!(f, "Infinity"),
            Self::NegativeInfinity => return write!(f, "-Infinity"),
            Self::Finite(value) => value,
        };
        let exponent = value.exponent();
        if value.is_zero()
            || (exponent > EXPONENTIAL_AT_NEGATIVE && exponent < EXPONENTIAL_AT_POSITIVE)
        {
            return write!(f, "{value}");
        }

        let sign = if value.is_negative() { "-" } else { "" };
        let digits = value.digits();
        let (lead, rest) = digits.split_at(1);
        let exponent_sign = if exponent < 0 { "" } else { "+" };
        if rest.is_empty() {
            write!(f, "{sign}{lead}e{exponent_sign}{exponent}")
        } else {
            write!(f, "{sign}{lead}.{rest}e{exponent_sign}{exponent}")
        }
    }
}

impl OpaqueValue for BigNumber {
    fn type_name(&self) -> &str {
        BIG_NUMBER_TYPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<BigNumber> for Value {
    fn from(value: BigNumber) -> Self {
        Value::opaque(value)
    }
}

#[cfg(test)]
#[path = "bignumber_test.rs"]
mod tests;

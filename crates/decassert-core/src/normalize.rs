//! Conversion of heterogeneous assertion operands into [`BigNumber`]s.

use crate::bignumber::{BigNumber, BIG_NUMBER_TYPE_NAME};
use crate::config::PluginOptions;
use decassert_host::{OpaqueValue, Value};
use num_bigint::BigInt;
use std::any::Any;
use std::borrow::Cow;
use std::fmt;

/// Constructor name of the external big-integer convention. Any opaque value
/// reporting this type name is converted through its string form.
pub const EXTERNAL_BIG_INTEGER_TYPE_NAME: &str = "BN";

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
#[error("expected {rendered} to be an instance of string, number, BN or BigNumber")]
pub struct InvalidOperandError {
    rendered: String,
}

impl InvalidOperandError {
    pub fn new(value: &Value) -> Self {
        Self {
            rendered: value.to_string(),
        }
    }

    pub fn rendered(&self) -> &str {
        &self.rendered
    }
}

#[derive(Debug, Clone)]
pub enum InputKind<'a> {
    NativeNumber(f64),
    NumericString(&'a str),
    CanonicalDecimal(Cow<'a, BigNumber>),
    /// String form of an external big integer.
    ExternalBigInteger(String),
    Invalid,
}

/// An integer from `num-bigint` presented under the external big-integer
/// convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalBigInt(pub BigInt);

impl fmt::Display for ExternalBigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl OpaqueValue for ExternalBigInt {
    fn type_name(&self) -> &str {
        EXTERNAL_BIG_INTEGER_TYPE_NAME
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl From<ExternalBigInt> for Value {
    fn from(value: ExternalBigInt) -> Self {
        Value::opaque(value)
    }
}

pub fn is_big_number(value: &Value) -> bool {
    matches!(classify(value), InputKind::CanonicalDecimal(_))
}

/// Maps a value to the kind of operand it is. Canonical decimals are checked
/// first, then external big integers, then strings and native numbers.
pub fn classify(value: &Value) -> InputKind<'_> {
    if let Value::Opaque(opaque) = value {
        if let Some(canonical) = opaque.as_any().downcast_ref::<BigNumber>() {
            return InputKind::CanonicalDecimal(Cow::Borrowed(canonical));
        }
        // A BigNumber from another copy of this crate cannot be downcast.
        if opaque.type_name() == BIG_NUMBER_TYPE_NAME {
            let parsed = BigNumber::parse_lossy(opaque.to_string().as_str());
            return InputKind::CanonicalDecimal(Cow::Owned(parsed));
        }
        if let Some(integer) = opaque.as_any().downcast_ref::<ExternalBigInt>() {
            return InputKind::ExternalBigInteger(integer.0.to_string());
        }
        // Name-based fallback for big integers from code we know nothing about.
        if opaque.type_name() == EXTERNAL_BIG_INTEGER_TYPE_NAME {
            return InputKind::ExternalBigInteger(opaque.to_string());
        }
        return InputKind::Invalid;
    }

    match value {
        Value::Number(number) => InputKind::NativeNumber(*number),
        Value::String(raw) => InputKind::NumericString(raw.as_str()),
        _ => InputKind::Invalid,
    }
}

pub fn normalize(value: &Value) -> Result<BigNumber, InvalidOperandError> {
    normalize_with(&PluginOptions::default(), value)
}

pub fn normalize_with(
    options: &PluginOptions,
    value: &Value,
) -> Result<BigNumber, InvalidOperandError> {
    match classify(value) {
        InputKind::CanonicalDecimal(canonical) => Ok(canonical.into_owned()),
        InputKind::ExternalBigInteger(rendered) => Ok(BigNumber::parse_lossy(rendered.as_str())),
        InputKind::NativeNumber(number) => Ok(BigNumber::from_f64(number)),
        InputKind::NumericString(raw) if options.strict_numeric_strings => {
            BigNumber::parse(raw).map_err(|_| InvalidOperandError::new(value))
        }
        InputKind::NumericString(raw) => Ok(BigNumber::parse_lossy(raw)),
        InputKind::Invalid => Err(InvalidOperandError::new(value)),
    }
}

#[cfg(test)]
#[path = "normalize_test.rs"]
mod tests;

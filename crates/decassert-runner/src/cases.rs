use crate::document::decode_document;
use decassert_core::{BigNumber, ExternalBigInt};
use decassert_host::Value;
use num_bigint::BigInt;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fs;
use std::path::Path;

pub const CASES_SCHEMA: &str = "decassert-cases/0.0.1";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseFile {
    #[serde(default = "default_cases_schema")]
    pub schema: String,
    #[serde(default)]
    pub cases: Vec<Case>,
}

/// One expectation: a subject, optional `bignumber`/`not` markers and the
/// chain of steps applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    pub name: String,
    #[serde(default)]
    pub subject: JsonValue,
    #[serde(default)]
    pub bignumber: bool,
    #[serde(default)]
    pub negate: bool,
    #[serde(default)]
    pub steps: Vec<Step>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    #[serde(default)]
    pub args: Vec<JsonValue>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum CaseFileError {
    #[error("read case file failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("case file parse failed: {0}")]
    Parse(String),
    #[error("unsupported case file schema `{found}` (expected `{}`)", CASES_SCHEMA)]
    Schema { found: String },
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValueError {
    #[error("`$bignumber` expects a numeric string or number, got {0}")]
    BigNumber(String),
    #[error("`$bn` expects an integer string, got {0}")]
    BigInteger(String),
    #[error("`$function` expects a name string, got {0}")]
    Function(String),
    #[error("`$number` expects `NaN`, `Infinity` or `-Infinity`, got {0}")]
    SpecialNumber(String),
}

pub fn load_case_file(path: &Path) -> Result<CaseFile, CaseFileError> {
    let raw = fs::read_to_string(path).map_err(|source| CaseFileError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let file: CaseFile = decode_document(path, raw.as_str()).map_err(CaseFileError::Parse)?;
    if file.schema != CASES_SCHEMA {
        return Err(CaseFileError::Schema { found: file.schema });
    }
    Ok(file)
}

/// Converts a decoded document value into a host value. Single-key objects
/// whose key is `$bignumber`, `$bn`, `$function` or `$number` build the
/// corresponding non-JSON value.
pub fn to_value(json: &JsonValue) -> Result<Value, ValueError> {
    match json {
        JsonValue::Null => Ok(Value::Null),
        JsonValue::Bool(value) => Ok(Value::Bool(*value)),
        JsonValue::Number(number) => Ok(Value::from(number.as_f64().unwrap_or(f64::NAN))),
        JsonValue::String(value) => Ok(Value::from(value.as_str())),
        JsonValue::Array(items) => items
            .iter()
            .map(to_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::array),
        JsonValue::Object(entries) => {
            if entries.len() == 1 {
                if let Some((key, inner)) = entries.iter().next() {
                    if let Some(value) = tagged(key, inner)? {
                        return Ok(value);
                    }
                }
            }
            entries
                .iter()
                .map(|(key, value)| to_value(value).map(|value| (key.clone(), value)))
                .collect::<Result<Vec<_>, _>>()
                .map(Value::object)
        }
    }
}

fn tagged(key: &str, inner: &JsonValue) -> Result<Option<Value>, ValueError> {
    let value = match key {
        "$bignumber" => {
            let parsed = match inner {
                JsonValue::String(raw) => BigNumber::parse(raw).ok(),
                JsonValue::Number(number) => number.as_f64().map(BigNumber::from_f64),
                _ => None,
            };
            Value::from(parsed.ok_or_else(|| ValueError::BigNumber(inner.to_string()))?)
        }
        "$bn" => {
            let parsed = inner
                .as_str()
                .and_then(|raw| raw.parse::<BigInt>().ok())
                .or_else(|| inner.as_i64().map(BigInt::from));
            Value::from(ExternalBigInt(
                parsed.ok_or_else(|| ValueError::BigInteger(inner.to_string()))?,
            ))
        }
        "$function" => {
            let name = inner
                .as_str()
                .ok_or_else(|| ValueError::Function(inner.to_string()))?;
            Value::function(name)
        }
        "$number" => {
            let number = match inner.as_str() {
                Some("NaN") => f64::NAN,
                Some("Infinity") => f64::INFINITY,
                Some("-Infinity") => f64::NEG_INFINITY,
                _ => return Err(ValueError::SpecialNumber(inner.to_string())),
            };
            Value::from(number)
        }
        _ => return Ok(None),
    };
    Ok(Some(value))
}

fn default_cases_schema() -> String {
    CASES_SCHEMA.to_string()
}

#[cfg(test)]
#[path = "cases_test.rs"]
mod tests;

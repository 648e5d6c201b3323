use crate::value::Value;
use std::collections::BTreeMap;
use std::error::Error;

pub const NEGATE_FLAG: &str = "negate";
pub const MESSAGE_FLAG: &str = "message";

#[derive(Debug, thiserror::Error)]
pub enum AssertionError {
    #[error("{message}")]
    Failed {
        message: String,
        expected: Option<String>,
        actual: Option<String>,
    },
    #[error("unknown assertion `{0}`")]
    UnknownAssertion(String),
    #[error("`{method}` expects {expected} argument(s), got {actual}")]
    MissingArgument {
        method: String,
        expected: usize,
        actual: usize,
    },
    /// An error raised by a plugin that aborts the assertion itself, as opposed
    /// to a mismatch between expected and actual values.
    #[error(transparent)]
    Extension(Box<dyn Error + Send + Sync + 'static>),
}

impl AssertionError {
    pub fn extension<E>(error: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self::Extension(Box::new(error))
    }

    pub fn is_mismatch(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    pub fn downcast_extension<E: Error + 'static>(&self) -> Option<&E> {
        match self {
            Self::Extension(source) => source.downcast_ref::<E>(),
            _ => None,
        }
    }
}

/// Per-expectation state: the subject under test and a flag store.
#[derive(Debug, Clone)]
pub struct Assertion {
    object: Value,
    flags: BTreeMap<String, Value>,
}

impl Assertion {
    pub fn new(object: Value) -> Self {
        Self {
            object,
            flags: BTreeMap::new(),
        }
    }

    pub fn object(&self) -> &Value {
        &self.object
    }

    pub fn flag(&self, name: &str) -> Option<&Value> {
        self.flags.get(name)
    }

    pub fn flag_enabled(&self, name: &str) -> bool {
        matches!(self.flags.get(name), Some(Value::Bool(true)))
    }

    pub fn set_flag(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.flags.insert(name.into(), value.into());
    }

    pub fn is_negated(&self) -> bool {
        self.flag_enabled(NEGATE_FLAG)
    }

    /// Reports an outcome. `when_true` is used when the positive form fails and
    /// `when_false` when the negated form fails. Templates may reference
    /// `{this}`, `{act}` and `{exp}`.
    pub fn assert(
        &self,
        condition: bool,
        when_true: &str,
        when_false: &str,
        expected: &Value,
        actual: &Value,
    ) -> Result<(), AssertionError> {
        let negated = self.is_negated();
        if condition != negated {
            return Ok(());
        }
        let template = if negated { when_false } else { when_true };
        let message = self.render(template, expected, actual);
        Err(AssertionError::Failed {
            message: self.prefixed(message),
            expected: Some(expected.to_string()),
            actual: Some(actual.to_string()),
        })
    }

    pub fn render(&self, template: &str, expected: &Value, actual: &Value) -> String {
        template
            .replace("{this}", self.object.to_string().as_str())
            .replace("{act}", actual.to_string().as_str())
            .replace("{exp}", expected.to_string().as_str())
    }

    /// A failure that is not subject to negation, such as a type mismatch.
    pub fn fail(&self, message: impl Into<String>) -> AssertionError {
        AssertionError::Failed {
            message: self.prefixed(message.into()),
            expected: None,
            actual: None,
        }
    }

    fn prefixed(&self, message: String) -> String {
        match self.flags.get(MESSAGE_FLAG) {
            Some(Value::String(custom)) if !custom.is_empty() => format!("{custom}: {message}"),
            _ => message,
        }
    }
}

#[cfg(test)]
#[path = "assertion_test.rs"]
mod tests;

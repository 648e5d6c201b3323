use crate::assertion::{Assertion, AssertionError, MESSAGE_FLAG, NEGATE_FLAG};
use crate::host::{Args, Host};
use crate::value::Value;

/// A chainable expectation. Every step consumes the expectation and hands it
/// back on success so flags set earlier in the chain stay in effect.
#[derive(Debug)]
pub struct Expectation<'h> {
    host: &'h Host,
    assertion: Assertion,
}

impl<'h> Expectation<'h> {
    pub(crate) fn new(host: &'h Host, assertion: Assertion) -> Self {
        Self { host, assertion }
    }

    pub fn assertion(&self) -> &Assertion {
        &self.assertion
    }

    pub fn into_assertion(self) -> Assertion {
        self.assertion
    }

    pub fn property(mut self, name: &str) -> Result<Self, AssertionError> {
        let property = self
            .host
            .property(name)
            .ok_or_else(|| AssertionError::UnknownAssertion(name.to_string()))?;
        property(&mut self.assertion)?;
        Ok(self)
    }

    pub fn call(mut self, name: &str, args: Args) -> Result<Self, AssertionError> {
        let method = self
            .host
            .method(name)
            .ok_or_else(|| AssertionError::UnknownAssertion(name.to_string()))?;
        if let Some(message) = args.message() {
            self.assertion.set_flag(MESSAGE_FLAG, message);
        }
        method(&mut self.assertion, &args)?;
        Ok(self)
    }

    /// Resolves `name` as a property when it takes no arguments and the host
    /// knows such a property, otherwise as a method.
    pub fn step(mut self, name: &str, args: Args) -> Result<Self, AssertionError> {
        if args.is_empty() && self.host.has_property(name) {
            if let Some(message) = args.message() {
                self.assertion.set_flag(MESSAGE_FLAG, message);
            }
            self.property(name)
        } else {
            self.call(name, args)
        }
    }

    pub fn not(mut self) -> Self {
        self.assertion.set_flag(NEGATE_FLAG, true);
        self
    }

    pub fn to(self) -> Self {
        self
    }

    pub fn be(self) -> Self {
        self
    }

    pub fn ok(self) -> Result<Self, AssertionError> {
        self.property("ok")
    }

    pub fn undefined(self) -> Result<Self, AssertionError> {
        self.property("undefined")
    }

    pub fn null(self) -> Result<Self, AssertionError> {
        self.property("null")
    }

    pub fn equal(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("equal", Args::new([expected.into()]))
    }

    pub fn equals(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("equals", Args::new([expected.into()]))
    }

    pub fn eq(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("eq", Args::new([expected.into()]))
    }

    pub fn above(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("above", Args::new([expected.into()]))
    }

    pub fn gt(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("gt", Args::new([expected.into()]))
    }

    pub fn greater_than(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("greaterThan", Args::new([expected.into()]))
    }

    pub fn least(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("least", Args::new([expected.into()]))
    }

    pub fn gte(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("gte", Args::new([expected.into()]))
    }

    pub fn below(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("below", Args::new([expected.into()]))
    }

    pub fn lt(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("lt", Args::new([expected.into()]))
    }

    pub fn less_than(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("lessThan", Args::new([expected.into()]))
    }

    pub fn most(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("most", Args::new([expected.into()]))
    }

    pub fn lte(self, expected: impl Into<Value>) -> Result<Self, AssertionError> {
        self.call("lte", Args::new([expected.into()]))
    }

    pub fn close_to(
        self,
        expected: impl Into<Value>,
        delta: impl Into<Value>,
    ) -> Result<Self, AssertionError> {
        self.call("closeTo", Args::new([expected.into(), delta.into()]))
    }

    pub fn approximately(
        self,
        expected: impl Into<Value>,
        delta: impl Into<Value>,
    ) -> Result<Self, AssertionError> {
        self.call("approximately", Args::new([expected.into(), delta.into()]))
    }
}

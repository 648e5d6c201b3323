use crate::registry::BIGNUMBER_FLAG;
use decassert_host::{AssertionError, Expectation};

/// Chain methods for the properties registered by [`crate::BigNumberPlugin`].
pub trait BigNumberExpectation: Sized {
    fn bignumber(self) -> Result<Self, AssertionError>;
    fn finite(self) -> Result<Self, AssertionError>;
    fn negative(self) -> Result<Self, AssertionError>;
    fn integer(self) -> Result<Self, AssertionError>;
    fn zero(self) -> Result<Self, AssertionError>;
}

impl BigNumberExpectation for Expectation<'_> {
    fn bignumber(self) -> Result<Self, AssertionError> {
        self.property(BIGNUMBER_FLAG)
    }

    fn finite(self) -> Result<Self, AssertionError> {
        self.property("finite")
    }

    fn negative(self) -> Result<Self, AssertionError> {
        self.property("negative")
    }

    fn integer(self) -> Result<Self, AssertionError> {
        self.property("integer")
    }

    fn zero(self) -> Result<Self, AssertionError> {
        self.property("zero")
    }
}

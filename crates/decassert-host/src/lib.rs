//! A small chai-style assertion host: chainable expectations, per-expectation
//! flags, negation and a registry of properties and methods that plugins can
//! extend or overwrite.

pub mod assertion;
pub mod builtins;
pub mod expect;
pub mod host;
pub mod value;

pub use assertion::{Assertion, AssertionError, MESSAGE_FLAG, NEGATE_FLAG};
pub use builtins::{
    ABOVE_ALIASES, BELOW_ALIASES, CLOSE_TO_ALIASES, EQUAL_ALIASES, LANGUAGE_CHAINS, LEAST_ALIASES,
    MOST_ALIASES,
};
pub use expect::Expectation;
pub use host::{Args, Host, HostError, Method, Plugin, Property};
pub use value::{OpaqueValue, Value};

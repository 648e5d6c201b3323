use crate::assertion::{Assertion, AssertionError};
use crate::builtins;
use crate::expect::Expectation;
use crate::value::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::rc::Rc;
use tracing::{debug, trace};

pub type Method = Rc<dyn Fn(&mut Assertion, &Args) -> Result<(), AssertionError>>;
pub type Property = Rc<dyn Fn(&mut Assertion) -> Result<(), AssertionError>>;

/// Arguments of a method call. The optional custom failure message travels
/// next to the positional values instead of among them.
#[derive(Debug, Clone, Default)]
pub struct Args {
    values: Vec<Value>,
    message: Option<String>,
}

impl Args {
    pub fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The first `count` values, or an error naming `method` when fewer were
    /// supplied. Extra values are ignored.
    pub fn require(&self, method: &str, count: usize) -> Result<&[Value], AssertionError> {
        if self.values.len() < count {
            return Err(AssertionError::MissingArgument {
                method: method.to_string(),
                expected: count,
                actual: self.values.len(),
            });
        }
        Ok(&self.values[..count])
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum HostError {
    #[error("cannot overwrite unknown method `{0}`")]
    UnknownMethod(String),
}

pub trait Plugin {
    fn name(&self) -> &str;
    fn install(&self, host: &mut Host) -> Result<(), HostError>;
}

/// Registry of assertion properties and methods shared by every expectation
/// created from it.
#[derive(Clone, Default)]
pub struct Host {
    properties: BTreeMap<String, Property>,
    methods: BTreeMap<String, Method>,
    plugins: BTreeSet<String>,
}

impl Host {
    /// A host with the built-in vocabulary registered.
    pub fn new() -> Self {
        let mut host = Self::bare();
        builtins::register(&mut host);
        host
    }

    pub fn bare() -> Self {
        Self::default()
    }

    pub fn expect(&self, value: impl Into<Value>) -> Expectation<'_> {
        Expectation::new(self, Assertion::new(value.into()))
    }

    pub fn add_property(&mut self, name: impl Into<String>, property: Property) {
        let name = name.into();
        trace!(property = %name, "register property");
        self.properties.insert(name, property);
    }

    pub fn add_method(&mut self, name: impl Into<String>, method: Method) {
        let name = name.into();
        trace!(method = %name, "register method");
        self.methods.insert(name, method);
    }

    /// Replaces `name` with the method returned by `wrap`, which receives the
    /// current implementation.
    pub fn overwrite_method<F>(&mut self, name: &str, wrap: F) -> Result<(), HostError>
    where
        F: FnOnce(Method) -> Method,
    {
        let original = self
            .methods
            .get(name)
            .cloned()
            .ok_or_else(|| HostError::UnknownMethod(name.to_string()))?;
        trace!(method = name, "overwrite method");
        self.methods.insert(name.to_string(), wrap(original));
        Ok(())
    }

    pub fn property(&self, name: &str) -> Option<Property> {
        self.properties.get(name).cloned()
    }

    pub fn method(&self, name: &str) -> Option<Method> {
        self.methods.get(name).cloned()
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.properties.contains_key(name)
    }

    pub fn has_method(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Installs `plugin` unless a plugin with the same name is already
    /// installed on this host, in which case this is a no-op.
    pub fn use_plugin<P: Plugin + ?Sized>(&mut self, plugin: &P) -> Result<(), HostError> {
        let name = plugin.name().to_string();
        if self.plugins.contains(&name) {
            debug!(plugin = %name, "plugin already installed, skipping");
            return Ok(());
        }
        plugin.install(self)?;
        debug!(plugin = %name, "plugin installed");
        self.plugins.insert(name);
        Ok(())
    }

    pub fn is_installed(&self, plugin: &str) -> bool {
        self.plugins.contains(plugin)
    }
}

impl fmt::Debug for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Host")
            .field("properties", &self.properties.keys().collect::<Vec<_>>())
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .field("plugins", &self.plugins)
            .finish()
    }
}

#[cfg(test)]
#[path = "host_test.rs"]
mod tests;

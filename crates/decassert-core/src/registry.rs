use crate::bignumber::BigNumber;
use crate::config::PluginOptions;
use crate::normalize::normalize_with;
use crate::predicates::{
    ClassificationCheck, ComparisonFamily, CLASSIFICATION_CHECKS, COMPARISON_FAMILIES,
};
use decassert_host::{
    Args, Assertion, AssertionError, Host, HostError, Method, Plugin, Property, Value,
};
use std::rc::Rc;
use tracing::trace;

pub const PLUGIN_NAME: &str = "bignumber";

/// Flag marking an expectation as decimal-aware.
pub const BIGNUMBER_FLAG: &str = "bignumber";

/// Installs the decimal-aware vocabulary: the `bignumber` marker property,
/// interception of every comparison family and the classification properties.
#[derive(Debug, Clone, Copy, Default)]
pub struct BigNumberPlugin {
    options: PluginOptions,
}

impl BigNumberPlugin {
    pub fn new(options: PluginOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PluginOptions {
        &self.options
    }
}

impl Plugin for BigNumberPlugin {
    fn name(&self) -> &str {
        PLUGIN_NAME
    }

    fn install(&self, host: &mut Host) -> Result<(), HostError> {
        host.add_property(
            BIGNUMBER_FLAG,
            Rc::new(|assertion: &mut Assertion| -> Result<(), AssertionError> {
                assertion.set_flag(BIGNUMBER_FLAG, true);
                Ok(())
            }),
        );

        for family in COMPARISON_FAMILIES {
            for alias in family.aliases.iter().copied() {
                let options = self.options;
                host.overwrite_method(alias, |original| {
                    intercept(original, family, alias, options)
                })?;
            }
        }

        for check in CLASSIFICATION_CHECKS {
            host.add_property(check.name, classification(check, self.options));
        }
        Ok(())
    }
}

/// Installs [`BigNumberPlugin`] with default options. Installing twice on the
/// same host is a no-op.
pub fn install(host: &mut Host) -> Result<(), HostError> {
    host.use_plugin(&BigNumberPlugin::default())
}

fn intercept(
    original: Method,
    family: &'static ComparisonFamily,
    alias: &'static str,
    options: PluginOptions,
) -> Method {
    Rc::new(move |assertion: &mut Assertion, args: &Args| -> Result<(), AssertionError> {
        if !assertion.flag_enabled(BIGNUMBER_FLAG) {
            return original(assertion, args);
        }

        let values = args.require(alias, family.arity)?;
        let actual = normalize_operand(&options, assertion.object())?;
        let operands = values
            .iter()
            .map(|value| normalize_operand(&options, value))
            .collect::<Result<Vec<_>, _>>()?;
        trace!(method = alias, actual = %actual, "decimal-aware comparison");

        let comparison = (family.evaluate)(&actual, &operands);
        assertion.assert(
            comparison.holds,
            &comparison.when_true,
            &comparison.when_false,
            &Value::from(comparison.expected),
            &Value::from(actual),
        )
    })
}

fn classification(check: &'static ClassificationCheck, options: PluginOptions) -> Property {
    Rc::new(move |assertion: &mut Assertion| -> Result<(), AssertionError> {
        let value = normalize_operand(&options, assertion.object())?;
        let holds = (check.holds)(&value);
        assertion.assert(
            holds,
            check.when_true,
            check.when_false,
            &Value::from(value),
            assertion.object(),
        )
    })
}

fn normalize_operand(options: &PluginOptions, value: &Value) -> Result<BigNumber, AssertionError> {
    normalize_with(options, value).map_err(AssertionError::extension)
}

#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

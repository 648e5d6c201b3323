use serde::{Deserialize, Serialize};

/// Options for [`crate::BigNumberPlugin`], usually read from a runner config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PluginOptions {
    /// Reject strings that are not numeric literals instead of treating them
    /// as `NaN`.
    #[serde(default)]
    pub strict_numeric_strings: bool,
}

impl PluginOptions {
    pub fn strict() -> Self {
        Self {
            strict_numeric_strings: true,
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

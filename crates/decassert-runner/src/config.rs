use crate::document::decode_document;
use decassert_core::PluginOptions;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use tracing_subscriber::{fmt as subscriber, EnvFilter};

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "DECASSERT_LOG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunnerConfig {
    #[serde(default = "default_runner_schema")]
    pub schema: String,
    #[serde(default)]
    pub plugin: PluginOptions,
    #[serde(default)]
    pub fail_fast: bool,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            schema: default_runner_schema(),
            plugin: PluginOptions::default(),
            fail_fast: false,
            logging: LoggingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LoggingConfig {
    /// Installs a stderr subscriber. `DECASSERT_LOG` wins over `level`. A
    /// subscriber that is already installed is left in place.
    pub fn init(&self) {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(&self.level));

        let installed = match self.format.as_str() {
            "json" => subscriber()
                .json()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
            _ => subscriber()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };
        if installed.is_err() {
            tracing::debug!("tracing subscriber already installed");
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

/// A configuration problem, located by a dotted field path.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ConfigIssue {
    pub field: String,
    pub reference: String,
    pub message: String,
}

impl fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): {}", self.field, self.reference, self.message)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunnerConfigError {
    #[error("read runner config failed `{path}`: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("runner config parse failed: {0}")]
    Parse(String),
    #[error("runner config validation failed: {}", render_issues(.0))]
    Validation(Vec<ConfigIssue>),
}

pub fn load_runner_config(path: &Path) -> Result<RunnerConfig, RunnerConfigError> {
    let raw = fs::read_to_string(path).map_err(|source| RunnerConfigError::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let config: RunnerConfig =
        decode_document(path, raw.as_str()).map_err(RunnerConfigError::Parse)?;

    let mut issues = validate_runner_config(&config);
    issues.sort();
    if !issues.is_empty() {
        return Err(RunnerConfigError::Validation(issues));
    }
    Ok(config)
}

pub fn validate_runner_config(config: &RunnerConfig) -> Vec<ConfigIssue> {
    let mut issues = Vec::<ConfigIssue>::new();
    if config.schema != default_runner_schema() {
        issues.push(config_issue(
            "runner.config.schema",
            "schema",
            format!(
                "unsupported runner config schema `{}` (expected `{}`)",
                config.schema,
                default_runner_schema()
            ),
        ));
    }
    if let Err(error) = EnvFilter::try_new(config.logging.level.as_str()) {
        issues.push(config_issue(
            "runner.config.logging.level",
            "logging.level",
            format!("invalid log filter `{}`: {error}", config.logging.level),
        ));
    }
    if !matches!(config.logging.format.as_str(), "pretty" | "json") {
        issues.push(config_issue(
            "runner.config.logging.format",
            "logging.format",
            format!(
                "unsupported log format `{}` (expected `pretty` or `json`)",
                config.logging.format
            ),
        ));
    }
    issues
}

fn config_issue(reference: &str, field: &str, message: String) -> ConfigIssue {
    ConfigIssue {
        field: field.to_string(),
        reference: reference.to_string(),
        message,
    }
}

fn render_issues(issues: &[ConfigIssue]) -> String {
    issues
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn default_runner_schema() -> String {
    "decassert-runner/0.0.1".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

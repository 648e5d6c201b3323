use super::{load_runner_config, validate_runner_config, RunnerConfig, RunnerConfigError};
use decassert_core::PluginOptions;
use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

#[test]
fn load_runner_config_parses_yaml() {
    let path = write_temp_file(
        "runner-config-ok",
        "yaml",
        r#"
schema: decassert-runner/0.0.1
fail_fast: true
plugin:
  strict_numeric_strings: true
logging:
  level: debug
  format: json
"#,
    );

    let config = load_runner_config(path.as_path()).expect("config must load");
    assert!(config.fail_fast);
    assert_eq!(config.plugin, PluginOptions::strict());
    assert_eq!(config.logging.level, "debug");
    assert_eq!(config.logging.format, "json");
}

#[test]
fn load_runner_config_fills_defaults_from_json() {
    let path = write_temp_file("runner-config-json", "json", r#"{"schema": "decassert-runner/0.0.1"}"#);
    let config = load_runner_config(path.as_path()).expect("config must load");
    assert_eq!(config, RunnerConfig::default());
    assert_eq!(config.logging.level, "warn");
    assert!(!config.plugin.strict_numeric_strings);
}

#[test]
fn load_runner_config_expands_env_placeholders() {
    std::env::set_var("DECASSERT_RUNNER_TEST_STRICT", "true");
    let path = write_temp_file(
        "runner-config-env",
        "yaml",
        r#"
plugin:
  strict_numeric_strings: ${DECASSERT_RUNNER_TEST_STRICT}
"#,
    );
    let config = load_runner_config(path.as_path()).expect("config must load");
    assert!(config.plugin.strict_numeric_strings);
}

#[test]
fn load_runner_config_reports_missing_env_var() {
    let path = write_temp_file(
        "runner-config-env-missing",
        "yaml",
        "fail_fast: ${DECASSERT_RUNNER_TEST_UNSET}\n",
    );
    let error = load_runner_config(path.as_path()).expect_err("must fail");
    assert!(matches!(error, RunnerConfigError::Parse(message) if message.contains("DECASSERT_RUNNER_TEST_UNSET")));
}

#[test]
fn load_runner_config_collects_every_validation_issue() {
    let path = write_temp_file(
        "runner-config-invalid",
        "yaml",
        r#"
schema: decassert-runner/9.9.9
logging:
  level: decassert=loud
  format: xml
"#,
    );
    let error = load_runner_config(path.as_path()).expect_err("must fail");
    let RunnerConfigError::Validation(issues) = error else {
        panic!("expected validation error");
    };
    let fields = issues
        .iter()
        .map(|issue| issue.field.as_str())
        .collect::<Vec<_>>();
    assert_eq!(fields, ["logging.format", "logging.level", "schema"]);
    assert!(issues[2].message.contains("decassert-runner/9.9.9"));
}

#[test]
fn validate_runner_config_accepts_defaults() {
    assert!(validate_runner_config(&RunnerConfig::default()).is_empty());
}

#[test]
fn load_runner_config_reports_unreadable_file() {
    let mut path = std::env::temp_dir();
    path.push("decassert-runner-config-does-not-exist.yaml");
    let error = load_runner_config(path.as_path()).expect_err("must fail");
    assert!(matches!(error, RunnerConfigError::ReadFile { .. }));
    assert!(error.to_string().contains("does-not-exist"));
}

#[test]
fn load_runner_config_rejects_unknown_shapes() {
    let path = write_temp_file("runner-config-shape", "json", r#"{"fail_fast": "sometimes"}"#);
    let error = load_runner_config(path.as_path()).expect_err("must fail");
    assert!(matches!(error, RunnerConfigError::Parse(message) if message.starts_with("json decode error")));
}

fn write_temp_file(prefix: &str, extension: &str, content: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time must be monotonic")
        .as_nanos();
    path.push(format!(
        "decassert-{prefix}-{}-{nanos}.{extension}",
        std::process::id()
    ));
    fs::write(&path, content).expect("must write temp file");
    path
}

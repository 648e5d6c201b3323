mod cases;
mod cli;
mod config;
mod document;
mod run;

pub use cases::{load_case_file, to_value, Case, CaseFile, CaseFileError, Step, ValueError, CASES_SCHEMA};
pub use cli::{CheckCommand, Cli, Commands, OutputFormat};
pub use config::{
    load_runner_config, validate_runner_config, ConfigIssue, LoggingConfig, RunnerConfig,
    RunnerConfigError, LOG_ENV,
};
pub use run::{
    build_host, execute_check, render_text, run_case, run_cases, CaseReport, CaseStatus,
    CheckOutput, CheckReport, RunnerError, REPORT_SCHEMA,
};

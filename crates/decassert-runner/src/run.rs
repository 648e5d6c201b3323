use crate::cases::{load_case_file, to_value, Case, CaseFileError, Step};
use crate::cli::{CheckCommand, OutputFormat};
use crate::config::{load_runner_config, RunnerConfig, RunnerConfigError};
use decassert_core::{BigNumberExpectation, BigNumberPlugin};
use decassert_host::{Args, AssertionError, Expectation, Host, HostError};
use serde::Serialize;
use tracing::{debug, info, warn};

pub const REPORT_SCHEMA: &str = "decassert-report/0.0.1";

#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    #[error("runner config load failed: {0}")]
    ConfigLoad(#[from] RunnerConfigError),
    #[error("case file load failed: {0}")]
    CasesLoad(#[from] CaseFileError),
    #[error("plugin install failed: {0}")]
    Install(#[from] HostError),
    #[error("report encode failed: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStatus {
    Pass,
    Fail,
    Error,
}

impl CaseStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "pass",
            Self::Fail => "fail",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseReport {
    pub name: String,
    pub status: CaseStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub schema: String,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub cases: Vec<CaseReport>,
}

impl CheckReport {
    pub fn success(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

/// Rendered output plus whether every case passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutput {
    pub rendered: String,
    pub success: bool,
}

pub fn execute_check(command: &CheckCommand) -> Result<CheckOutput, RunnerError> {
    let config = match &command.config {
        Some(path) => load_runner_config(path)?,
        None => RunnerConfig::default(),
    };
    config.logging.init();

    let file = load_case_file(&command.cases)?;
    info!(
        cases = file.cases.len(),
        path = %command.cases.display(),
        "loaded case file"
    );

    let host = build_host(&config)?;
    let report = run_cases(&host, &file.cases, command.fail_fast || config.fail_fast);
    let rendered = match command.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => serde_json::to_string_pretty(&report)
            .map_err(|error| RunnerError::Encode(error.to_string()))?,
    };
    Ok(CheckOutput {
        rendered,
        success: report.success(),
    })
}

pub fn build_host(config: &RunnerConfig) -> Result<Host, HostError> {
    let mut host = Host::new();
    host.use_plugin(&BigNumberPlugin::new(config.plugin))?;
    Ok(host)
}

pub fn run_cases(host: &Host, cases: &[Case], fail_fast: bool) -> CheckReport {
    let mut report = CheckReport {
        schema: REPORT_SCHEMA.to_string(),
        passed: 0,
        failed: 0,
        errored: 0,
        cases: Vec::with_capacity(cases.len()),
    };
    for case in cases {
        let outcome = run_case(host, case);
        match outcome.status {
            CaseStatus::Pass => report.passed += 1,
            CaseStatus::Fail => report.failed += 1,
            CaseStatus::Error => report.errored += 1,
        }
        let stop = fail_fast && outcome.status != CaseStatus::Pass;
        report.cases.push(outcome);
        if stop {
            warn!(case = %case.name, "stopping at first case that did not pass");
            break;
        }
    }
    report
}

pub fn run_case(host: &Host, case: &Case) -> CaseReport {
    let subject = match to_value(&case.subject) {
        Ok(subject) => subject,
        Err(error) => return case_report(case, CaseStatus::Error, None, Some(error.to_string())),
    };

    let mut expectation = host.expect(subject);
    if case.bignumber {
        expectation = match expectation.bignumber() {
            Ok(expectation) => expectation,
            Err(error) => return failure(case, None, &error),
        };
    }
    if case.negate {
        expectation = expectation.not();
    }

    for step in &case.steps {
        expectation = match apply_step(expectation, step) {
            Ok(expectation) => expectation,
            Err(StepError::Value(message)) => {
                return case_report(case, CaseStatus::Error, Some(&step.name), Some(message))
            }
            Err(StepError::Assertion(error)) => return failure(case, Some(&step.name), &error),
        };
    }
    debug!(case = %case.name, steps = case.steps.len(), "case passed");
    case_report(case, CaseStatus::Pass, None, None)
}

enum StepError {
    Value(String),
    Assertion(AssertionError),
}

fn apply_step<'h>(expectation: Expectation<'h>, step: &Step) -> Result<Expectation<'h>, StepError> {
    let values = step
        .args
        .iter()
        .map(to_value)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|error| StepError::Value(error.to_string()))?;
    let mut args = Args::new(values);
    if let Some(message) = &step.message {
        args = args.with_message(message.as_str());
    }
    expectation
        .step(step.name.as_str(), args)
        .map_err(StepError::Assertion)
}

// Mismatches fail the case; anything that aborted the assertion is an error.
fn failure(case: &Case, step: Option<&str>, error: &AssertionError) -> CaseReport {
    let status = if error.is_mismatch() {
        CaseStatus::Fail
    } else {
        CaseStatus::Error
    };
    case_report(case, status, step, Some(error.to_string()))
}

fn case_report(
    case: &Case,
    status: CaseStatus,
    step: Option<&str>,
    message: Option<String>,
) -> CaseReport {
    CaseReport {
        name: case.name.clone(),
        status,
        step: step.map(str::to_string),
        message,
    }
}

pub fn render_text(report: &CheckReport) -> String {
    let mut lines = report
        .cases
        .iter()
        .map(|case| {
            let mut line = format!("{:<5} {}", case.status.as_str(), case.name);
            if let Some(step) = &case.step {
                line.push_str(format!(" [{step}]").as_str());
            }
            if let Some(message) = &case.message {
                line.push_str(format!(": {message}").as_str());
            }
            line
        })
        .collect::<Vec<_>>();
    lines.push(format!(
        "{} passed, {} failed, {} errored",
        report.passed, report.failed, report.errored
    ));
    lines.join("\n")
}

#[cfg(test)]
#[path = "run_test.rs"]
mod tests;

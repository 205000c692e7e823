use std::collections::HashMap;
use std::path::PathBuf;

use crate::cmd::action::Action;
use crate::cmd::builder::build_command_line;
use crate::cmd::envvars;
use crate::cmd::platform::Platform;
use crate::cmd::separators::convert_separators;
use crate::error::StepError;
use crate::runner::{self, ExecutionResult};
use crate::sink::LogSink;

/// Immutable parameters for one hammer invocation, fixed for its duration.
#[derive(Debug, Clone)]
pub struct StepRequest {
    pub install_dir: String,
    pub drivers_dir: String,
    pub project_dir: String,
    pub server: Option<String>,
    pub action: Action,
    /// Working directory the child runs in (the build workspace).
    pub working_dir: PathBuf,
}

/// Supplies the build-time variables layered over the inherited process
/// environment. The host may fail to produce them; that aborts the step
/// before anything is launched.
pub trait BuildEnvironment {
    fn resolve(&self) -> Result<HashMap<String, String>, StepError>;
}

/// Variables the host already has in hand.
#[derive(Debug, Default)]
pub struct StaticEnvironment(pub HashMap<String, String>);

impl BuildEnvironment for StaticEnvironment {
    fn resolve(&self) -> Result<HashMap<String, String>, StepError> {
        Ok(self.0.clone())
    }
}

/// Run one step end to end: echo the configuration, build and normalize
/// the command line, launch hammer, and stream its output into `sink`.
///
/// This is the invocation boundary: every `StepError` is converted into a
/// failed `ExecutionResult` plus a human-readable sink line. Nothing
/// propagates to the caller, and nothing is retried.
pub fn perform(
    request: &StepRequest,
    platform: Platform,
    env: &dyn BuildEnvironment,
    sink: &mut dyn LogSink,
) -> ExecutionResult {
    match try_perform(request, platform, env, sink) {
        Ok(result) => result,
        Err(err) => {
            sink.line(&format!("hammerstep: {err}"));
            let mut source = std::error::Error::source(&err);
            while let Some(cause) = source {
                sink.line(&format!("  caused by: {cause}"));
                source = cause.source();
            }
            tracing::error!("step failed: {err}");
            ExecutionResult::failed()
        }
    }
}

fn try_perform(
    request: &StepRequest,
    platform: Platform,
    env: &dyn BuildEnvironment,
    sink: &mut dyn LogSink,
) -> Result<ExecutionResult, StepError> {
    validate(request)?;

    sink.line("Global config:");
    sink.line(&format!("  install dir = {}", request.install_dir));
    sink.line(&format!("  drivers dir = {}", request.drivers_dir));
    sink.line("Project config:");
    sink.line(&format!("  project dir = {}", request.project_dir));
    sink.line(&format!(
        "  server = {}",
        request.server.as_deref().unwrap_or("")
    ));
    sink.line(&format!("  action = {}", request.action));

    let raw = build_command_line(
        &request.install_dir,
        &request.drivers_dir,
        &request.project_dir,
        request.action,
        request.server.as_deref(),
        platform,
    )?;

    let separated = convert_separators(&raw, platform.separator());
    sink.line(&format!("File separators sanitized: {separated}"));

    let command_line = match platform {
        Platform::Posix => envvars::to_posix(&separated),
        Platform::Windows => envvars::to_windows(&separated),
    };
    sink.line(&format!("Environment variables sanitized: {command_line}"));

    let env_overrides = env.resolve()?;

    let argv = runner::build_argv(&command_line, platform);
    sink.line(&format!("Command line: {}", argv.join(" ")));
    sink.line(&format!(
        "Working directory: {}",
        request.working_dir.display()
    ));

    runner::run(
        &command_line,
        platform,
        &request.working_dir,
        &env_overrides,
        sink,
    )
}

/// Plain input checking, the form-validation layer reduced to functions.
fn validate(request: &StepRequest) -> Result<(), StepError> {
    let required = [
        ("install dir", request.install_dir.as_str()),
        ("drivers dir", request.drivers_dir.as_str()),
        ("project dir", request.project_dir.as_str()),
    ];
    for (label, value) in required {
        if value.trim().is_empty() {
            return Err(StepError::configuration(format!(
                "{label} must not be empty"
            )));
        }
    }
    Ok(())
}

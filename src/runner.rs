use std::collections::HashMap;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use std::process::{Command, Stdio};
use std::sync::{Mutex, PoisonError};
use std::thread;

use crate::cmd::platform::Platform;
use crate::cmd::tokenize::tokenize;
use crate::error::StepError;
use crate::sink::LogSink;

/// Outcome of one external invocation. No partial-success states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionResult {
    pub exit_code: i32,
    pub succeeded: bool,
}

impl ExecutionResult {
    pub fn from_exit_code(exit_code: i32) -> Self {
        ExecutionResult {
            exit_code,
            succeeded: exit_code == 0,
        }
    }

    /// Result reported when the step never reached a child exit status.
    pub fn failed() -> Self {
        ExecutionResult {
            exit_code: -1,
            succeeded: false,
        }
    }
}

/// Tokenize `command_line` into the argv actually handed to the OS.
///
/// Posix: a bare program token (no separator in it) gets a `./` prefix so
/// the loader never consults PATH for a relative executable. Windows: the
/// whole invocation is routed through `cmd /C`, which owns `.bat`
/// resolution; per-argument quoting is then the spawn facility's job.
pub fn build_argv(command_line: &str, platform: Platform) -> Vec<String> {
    let mut tokens = tokenize(command_line);
    if tokens.is_empty() {
        return tokens;
    }
    match platform {
        Platform::Posix => {
            if !tokens[0].contains('/') && !tokens[0].contains('\\') {
                tokens[0] = format!("./{}", tokens[0]);
            }
            tokens
        }
        Platform::Windows => {
            let mut argv = Vec::with_capacity(tokens.len() + 2);
            argv.push("cmd".to_string());
            argv.push("/C".to_string());
            argv.append(&mut tokens);
            argv
        }
    }
}

/// Launch the external process and stream its output into `sink`.
///
/// stdout and stderr are piped and pumped by reader threads, so the pipes
/// never back up and stall the child. Blocks until the child exits; the
/// only errors are launch and wait failures, a non-zero exit is a normal
/// result.
pub fn run(
    command_line: &str,
    platform: Platform,
    working_dir: &Path,
    env_overrides: &HashMap<String, String>,
    sink: &mut dyn LogSink,
) -> Result<ExecutionResult, StepError> {
    let argv = build_argv(command_line, platform);
    let Some((program, args)) = argv.split_first() else {
        return Err(StepError::configuration("empty command line"));
    };

    let mut command = Command::new(program);
    command
        .args(args)
        .current_dir(working_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());
    // Inherited environment plus build-time variables; override wins.
    for (key, value) in env_overrides {
        command.env(key, value);
    }

    let mut child = command.spawn().map_err(|source| StepError::Launch {
        program: program.clone(),
        source,
    })?;

    let stdout = child.stdout.take();
    let stderr = child.stderr.take();
    let shared = Mutex::new(sink);
    let shared = &shared;

    let status = thread::scope(|scope| {
        if let Some(out) = stdout {
            scope.spawn(move || pump(out, shared));
        }
        if let Some(err) = stderr {
            scope.spawn(move || pump(err, shared));
        }
        child.wait()
    })
    .map_err(|source| StepError::Interrupted {
        program: program.clone(),
        source,
    })?;

    Ok(ExecutionResult::from_exit_code(status.code().unwrap_or(-1)))
}

fn pump<R: Read>(stream: R, sink: &Mutex<&mut dyn LogSink>) {
    let reader = BufReader::new(stream);
    for line in reader.lines() {
        let Ok(text) = line else { break };
        sink.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .line(&text);
    }
}

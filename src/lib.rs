//! hammerstep: build-step runner for the Datical hammer CLI.
//!
//! Builds a platform-appropriate command line (path separators, env-var
//! syntax, executable suffix), launches hammer with a merged environment,
//! streams its output to a line sink, and reports pass/fail by exit code.

pub mod cmd;
pub mod config;
pub mod error;
pub mod runner;
pub mod sink;
pub mod step;

pub use cmd::{Action, Platform};
pub use error::StepError;
pub use runner::ExecutionResult;
pub use sink::{LogSink, MemorySink, WriteSink};
pub use step::{BuildEnvironment, StaticEnvironment, StepRequest, perform};

use std::io;

use thiserror::Error;

/// Everything that can stop an invocation before or during launch.
///
/// A non-zero exit from the child is not an error: it is a completed run
/// that did not succeed, reported through `ExecutionResult`.
#[derive(Debug, Error)]
pub enum StepError {
    /// Unrecognized action value or missing required input.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The ambient build environment could not be resolved.
    #[error("unable to resolve build environment: {0}")]
    Environment(String),

    /// The executable could not be found or started.
    #[error("failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },

    /// The wait for process completion was interrupted.
    #[error("interrupted while waiting for {program}: {source}")]
    Interrupted {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl StepError {
    pub fn configuration(message: impl Into<String>) -> Self {
        StepError::Configuration(message.into())
    }
}

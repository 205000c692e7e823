use std::fmt;
use std::str::FromStr;

use crate::error::StepError;

/// Operation requested of the hammer tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Forecast,
    Snapshot,
    Deploy,
    Status,
    Checkdrivers,
}

impl Action {
    /// Sub-command token as hammer expects it on the command line.
    pub fn token(self) -> &'static str {
        match self {
            Action::Forecast => "forecast",
            Action::Snapshot => "snapshot",
            Action::Deploy => "deploy",
            Action::Status => "status",
            Action::Checkdrivers => "checkdrivers",
        }
    }

    /// Every action except `checkdrivers` takes a quoted server argument.
    pub fn needs_server(self) -> bool {
        !matches!(self, Action::Checkdrivers)
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Action {
    type Err = StepError;

    /// Matching is exact and case-sensitive; anything else is a
    /// configuration error, never a silently malformed command line.
    fn from_str(value: &str) -> Result<Self, StepError> {
        match value {
            "forecast" => Ok(Action::Forecast),
            "snapshot" => Ok(Action::Snapshot),
            "deploy" => Ok(Action::Deploy),
            "status" => Ok(Action::Status),
            "checkdrivers" => Ok(Action::Checkdrivers),
            other => Err(StepError::configuration(format!(
                "unrecognized action: {other}"
            ))),
        }
    }
}

//! Error types for the probe run.

use thiserror::Error;

/// Result type alias using our error type.
pub type Result<T> = std::result::Result<T, ProbeError>;

/// Failures that abort the probe run.
///
/// Each variant maps to the exit code the monitoring platform keys on. The
/// display string is the message printed to stdout; an empty display means
/// the condition is reported by exit code alone.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// The argument vector did not contain exactly six parameters.
    #[error("Wrong number of parameters.")]
    InvalidParameters,

    /// The host could not be resolved or refused the connection.
    #[error("Unknown host.")]
    UnknownHost,

    /// Core discovery was rejected with HTTP 401.
    #[error("Invalid authentication.")]
    InvalidAuthentication,

    /// Discovery returned an empty core list.
    #[error("")]
    CoreNotFound,

    /// Discovery answered with an HTTP status other than 200 or 401.
    #[error("Response error ({0}).")]
    UnexpectedStatus(u16),

    /// Transport failure not classified as an unknown host.
    #[error("{0}")]
    Transport(#[source] reqwest::Error),
}

impl ProbeError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ProbeError::InvalidParameters => 3,
            ProbeError::CoreNotFound => 8,
            ProbeError::UnknownHost => 28,
            ProbeError::InvalidAuthentication
            | ProbeError::UnexpectedStatus(_)
            | ProbeError::Transport(_) => 1,
        }
    }
}

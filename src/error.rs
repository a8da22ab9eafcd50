//! Error types for retry
//!
//! Centralized error handling using thiserror.

use std::time::Duration;
use thiserror::Error;

/// All error types that can occur while retrying a command
#[derive(Debug, Error)]
pub enum RetryError {
    /// Bad attempt count or missing positional arguments; fatal, no attempts run
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The command could not be launched at all (e.g. not found)
    #[error("failed to start command: {0}")]
    Spawn(#[from] std::io::Error),

    /// The command ran but exited with a non-zero status
    /// (-1 when the process reported no code, e.g. killed by a signal)
    #[error("command exited with code {0}")]
    ExitCode(i32),

    /// A deadline expired before the command finished
    #[error("command timed out after {0:?}")]
    Timeout(Duration),

    /// Every attempt failed; wraps the error from the final attempt only
    #[error("all {attempts} attempts failed: {source}")]
    AllAttemptsFailed {
        attempts: u64,
        #[source]
        source: Box<RetryError>,
    },
}

/// Result type alias for retry operations
pub type Result<T> = std::result::Result<T, RetryError>;

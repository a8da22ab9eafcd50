//! Single-shot command execution under an optional deadline.
//!
//! The executor runs exactly one child process to completion (or until the
//! deadline expires) and classifies the outcome. All retry policy lives in
//! the runner; nothing here interprets exit codes beyond zero/non-zero.

use async_trait::async_trait;
use log::debug;
use std::process::Stdio;
use std::time::Duration;
use tokio::process::Command;

use crate::error::RetryError;

/// Outcome of one command execution.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Reported exit status, or -1 when the process had none
    /// (killed by a signal, or never started)
    pub exit_code: i32,
    /// None iff the process exited with status 0
    pub error: Option<RetryError>,
    /// True iff the attempt's deadline expired
    pub timed_out: bool,
}

/// Seam between the runner and process execution, mockable in tests.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Run `command` with `args` once, bounded by `timeout` when given.
    /// Blocks (awaits) until the child exits or the deadline expires.
    async fn execute(
        &self,
        command: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> ExecutionResult;
}

/// Executes real child processes with stdio inherited from the parent, so
/// the child's output reaches the user in real time with no capture.
pub struct ProcessExecutor;

#[async_trait]
impl CommandExecutor for ProcessExecutor {
    async fn execute(
        &self,
        command: &str,
        args: &[String],
        timeout: Option<Duration>,
    ) -> ExecutionResult {
        let mut cmd = Command::new(command);
        cmd.args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .kill_on_drop(true);

        let mut child = match cmd.spawn() {
            Ok(child) => child,
            Err(err) => {
                debug!("failed to spawn {command}: {err}");
                return ExecutionResult {
                    exit_code: -1,
                    error: Some(RetryError::Spawn(err)),
                    timed_out: false,
                };
            }
        };

        let waited = match timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(waited) => waited,
                Err(_) => {
                    // Deadline expired: kill the child and observe its
                    // termination before classifying the result.
                    let _ = child.start_kill();
                    let _ = child.wait().await;
                    debug!("{command} exceeded deadline of {limit:?}");
                    return ExecutionResult {
                        exit_code: -1,
                        error: Some(RetryError::Timeout(limit)),
                        timed_out: true,
                    };
                }
            },
            None => child.wait().await,
        };

        match waited {
            Ok(status) if status.success() => ExecutionResult {
                exit_code: 0,
                error: None,
                timed_out: false,
            },
            Ok(status) => {
                let code = status.code().unwrap_or(-1);
                ExecutionResult {
                    exit_code: code,
                    error: Some(RetryError::ExitCode(code)),
                    timed_out: false,
                }
            }
            Err(err) => ExecutionResult {
                exit_code: -1,
                error: Some(RetryError::Spawn(err)),
                timed_out: false,
            },
        }
    }
}

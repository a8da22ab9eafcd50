//! Runtime configuration for the retry loop.
//!
//! Built once from parsed CLI flags and never mutated afterwards; the
//! runner holds it for the lifetime of the run.

use std::time::Duration;

use crate::cli::Cli;

/// Settings that drive the retry loop. A zero duration means "disabled".
#[derive(Debug, Clone)]
pub struct Config {
    /// Wait between failed attempts
    pub delay: Duration,
    /// Suppress delay/timeout notices
    pub quiet: bool,
    /// Deadline for the whole run across all attempts
    pub timeout: Duration,
    /// Deadline for each individual command execution
    pub command_timeout: Duration,
    /// Emit attempt/success/failure notices
    pub verbose: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(1),
            quiet: false,
            timeout: Duration::ZERO,
            command_timeout: Duration::ZERO,
            verbose: false,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            delay: cli.delay,
            quiet: cli.quiet,
            timeout: cli.timeout,
            command_timeout: cli.command_timeout,
            verbose: cli.verbose,
        }
    }
}

//! User-facing notification sink for the retry loop.
//!
//! Two independent gates mirror the CLI flags: `verbose` enables the
//! attempt/success/failure lines, while `quiet` suppresses the delay and
//! timeout notices. With `verbose` off and `quiet` on the tool is fully
//! silent apart from the child's own output. Writes are fire-and-forget;
//! a failed write is never an error worth surfacing over the child's.

use colored::Colorize;
use std::io::{self, Write};
use std::time::Duration;

use crate::error::RetryError;

pub struct Logger {
    verbose: bool,
    quiet: bool,
    out: Box<dyn Write + Send>,
    err: Box<dyn Write + Send>,
}

impl Logger {
    /// Logger writing to the process's stdout and stderr.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self::with_streams(verbose, quiet, Box::new(io::stdout()), Box::new(io::stderr()))
    }

    /// Logger with injected streams, for capturing output in tests.
    pub fn with_streams(
        verbose: bool,
        quiet: bool,
        out: Box<dyn Write + Send>,
        err: Box<dyn Write + Send>,
    ) -> Self {
        Self {
            verbose,
            quiet,
            out,
            err,
        }
    }

    /// Announce an attempt about to run.
    pub fn attempt(&mut self, attempt: u64, total: u64, command: &str, args: &[String]) {
        if self.verbose {
            let mut line = format!("Attempt {attempt}/{total}: {command}");
            if !args.is_empty() {
                line.push(' ');
                line.push_str(&args.join(" "));
            }
            let _ = writeln!(self.out, "{line}");
        }
    }

    /// Announce a successful attempt.
    pub fn success(&mut self, attempt: u64) {
        if self.verbose {
            let _ = writeln!(
                self.out,
                "{} Command succeeded on attempt {attempt}",
                "[Success]".green()
            );
        }
    }

    /// Announce a failed attempt with its error detail.
    pub fn failure(&mut self, attempt: u64, error: &RetryError) {
        if self.verbose {
            let _ = writeln!(
                self.err,
                "{} Attempt {attempt} failed: {error}",
                "[Failed]".red()
            );
        }
    }

    /// Announce that an attempt hit its deadline.
    pub fn timeout(&mut self, duration: Duration) {
        if !self.quiet {
            let _ = writeln!(
                self.err,
                "Command timed out after {}",
                format_duration(duration)
            );
        }
    }

    /// Announce the wait before the next attempt.
    pub fn retry_delay(&mut self, delay: Duration) {
        if !self.quiet {
            let _ = writeln!(self.out, "Retrying in {}...", format_duration(delay));
        }
    }
}

/// Render a duration with `h`/`m`/`s` components (`90s` reads as `1m30s`),
/// falling back to Duration's own sub-minute forms (`1.5s`, `500ms`).
fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs();
    if secs < 60 {
        return format!("{duration:?}");
    }
    let hours = secs / 3600;
    let mins = (secs % 3600) / 60;
    let rem = secs % 60;
    if hours > 0 {
        format!("{hours}h{mins}m{rem}s")
    } else {
        format!("{mins}m{rem}s")
    }
}

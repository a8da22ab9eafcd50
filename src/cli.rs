//! CLI definitions using clap.
//!
//! Flags must appear before the positional arguments; everything from the
//! attempt count onwards is passed through untouched so the child command
//! keeps its own flags.

use clap::Parser;
use std::time::Duration;

/// Retry - run a command until it succeeds or the attempt budget is spent
#[derive(Parser, Debug)]
#[command(name = "retry")]
#[command(author, version, about, long_about = "\
Retry executes a command until it exits successfully or the maximum number
of attempts is reached. Supports configurable delays, per-command and
overall timeouts, and verbose or quiet output modes.

Examples:
  retry 3 curl https://example.com
  retry --delay 2s 5 ./flaky-script.sh
  retry --command-timeout 5s 3 npm test")]
pub struct Cli {
    /// Delay between retry attempts
    #[arg(short, long, default_value = "1s", value_parser = parse_duration)]
    pub delay: Duration,

    /// Suppress retry and timeout notices
    #[arg(short, long)]
    pub quiet: bool,

    /// Overall timeout for all attempts (0 = no timeout)
    #[arg(short, long, default_value = "0", value_parser = parse_duration)]
    pub timeout: Duration,

    /// Timeout for each individual command execution (0 = no timeout)
    #[arg(short = 'c', long, default_value = "0", value_parser = parse_duration)]
    pub command_timeout: Duration,

    /// Enable verbose logging of attempts and outcomes
    #[arg(short, long)]
    pub verbose: bool,

    /// Attempt count followed by the command and its arguments
    #[arg(
        value_name = "TIMES COMMAND [ARGS]...",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub args: Vec<String>,
}

/// Parse a human duration: `ms`/`s`/`m`/`h` suffixes, bare number = seconds.
fn parse_duration(text: &str) -> Result<Duration, String> {
    let text = text.trim();
    let split = text
        .find(|c: char| c.is_ascii_alphabetic())
        .unwrap_or(text.len());
    let (value, unit) = text.split_at(split);
    let value: f64 = value
        .parse()
        .map_err(|_| format!("invalid duration: {text}"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(format!("invalid duration: {text}"));
    }
    let secs = match unit {
        "ms" => value / 1000.0,
        "" | "s" => value,
        "m" => value * 60.0,
        "h" => value * 3600.0,
        _ => return Err(format!("unknown duration unit: {unit}")),
    };
    Duration::try_from_secs_f64(secs).map_err(|_| format!("invalid duration: {text}"))
}

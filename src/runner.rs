//! The retry loop: attempt counting, per-attempt deadlines, delay
//! scheduling, and outcome aggregation.
//!
//! The runner owns the config and logger and is generic over the executor
//! seam, so the loop is testable without spawning real processes.

use log::{debug, info};
use std::time::Duration;

use crate::config::Config;
use crate::error::{Result, RetryError};
use crate::executor::CommandExecutor;
use crate::logger::Logger;

/// Parse the attempt count: a base-10 integer >= 1. Zero, negative,
/// fractional, non-numeric, and empty inputs are all rejected alike.
pub fn parse_attempts(text: &str) -> Result<u64> {
    match text.parse::<u64>() {
        Ok(times) if times >= 1 => Ok(times),
        _ => Err(RetryError::InvalidArgument(format!(
            "invalid number of times: {text} (must be a positive integer)"
        ))),
    }
}

/// Drives the attempt loop against an executor and reports through a logger.
pub struct Runner<E: CommandExecutor> {
    config: Config,
    logger: Logger,
    executor: E,
}

impl<E: CommandExecutor> Runner<E> {
    pub fn new(config: Config, logger: Logger, executor: E) -> Self {
        Self {
            config,
            logger,
            executor,
        }
    }

    /// Entry point: `args` is `<times> <command> [command-args...]`.
    ///
    /// When an overall timeout is configured the whole loop runs under it;
    /// expiry aborts the run (killing any in-flight child) with
    /// [`RetryError::Timeout`].
    pub async fn run(&mut self, args: &[String]) -> Result<()> {
        if args.len() < 2 {
            return Err(RetryError::InvalidArgument(
                "usage: retry <times> <command> [args...]".to_string(),
            ));
        }

        let times = parse_attempts(&args[0])?;
        let overall = self.config.timeout;
        info!("running {} up to {times} times", args[1]);

        if overall.is_zero() {
            self.execute_with_retry(times, &args[1], &args[2..]).await
        } else {
            match tokio::time::timeout(
                overall,
                self.execute_with_retry(times, &args[1], &args[2..]),
            )
            .await
            {
                Ok(outcome) => outcome,
                Err(_) => Err(RetryError::Timeout(overall)),
            }
        }
    }

    /// The loop proper. `times` has been validated to be >= 1.
    async fn execute_with_retry(
        &mut self,
        times: u64,
        command: &str,
        args: &[String],
    ) -> Result<()> {
        let command_timeout = self.per_command_timeout();

        for attempt in 1..=times {
            self.logger.attempt(attempt, times, command, args);
            debug!("attempt {attempt}/{times}: spawning {command}");

            let result = self.executor.execute(command, args, command_timeout).await;

            match result.error {
                None => {
                    // First success short-circuits all remaining attempts.
                    self.logger.success(attempt);
                    return Ok(());
                }
                Some(err) => {
                    debug!("attempt {attempt} failed with exit code {}", result.exit_code);
                    self.logger.failure(attempt, &err);
                    if result.timed_out {
                        self.logger.timeout(self.config.command_timeout);
                    }
                    if attempt == times {
                        return Err(RetryError::AllAttemptsFailed {
                            attempts: times,
                            source: Box::new(err),
                        });
                    }
                    self.logger.retry_delay(self.config.delay);
                    tokio::time::sleep(self.config.delay).await;
                }
            }
        }

        Ok(())
    }

    fn per_command_timeout(&self) -> Option<Duration> {
        let limit = self.config.command_timeout;
        (!limit.is_zero()).then_some(limit)
    }
}

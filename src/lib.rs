//! retry - run a command until it succeeds or the attempt budget is spent.
//!
//! The loop is strictly sequential: one child process at a time, an
//! optional deadline per attempt, and a configurable delay between failed
//! attempts. The first successful exit ends the run.

pub mod cli;
pub mod config;
pub mod error;
pub mod executor;
pub mod logger;
pub mod runner;

pub use error::{Result, RetryError};

//! End-to-end retry scenarios
//!
//! Drives the library `Runner` with the real `ProcessExecutor` against
//! small `sh` scripts.

use std::fs;
use std::time::Duration;

use retry::config::Config;
use retry::error::RetryError;
use retry::executor::ProcessExecutor;
use retry::logger::Logger;
use retry::runner::Runner;
use tempfile::TempDir;

fn args(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

/// Silent logger so test output stays limited to the children's own streams.
fn silent_logger() -> Logger {
    Logger::new(false, true)
}

fn fast_config() -> Config {
    Config {
        delay: Duration::from_millis(10),
        ..Config::default()
    }
}

#[tokio::test]
async fn succeeds_immediately() {
    let mut runner = Runner::new(fast_config(), silent_logger(), ProcessExecutor);
    runner.run(&args(&["1", "true"])).await.unwrap();
}

#[tokio::test]
async fn fails_twice_then_succeeds() {
    let dir = TempDir::new().unwrap();
    let counter = dir.path().join("count");
    let script = format!(
        "n=$(cat {c} 2>/dev/null || echo 0); n=$((n + 1)); echo $n > {c}; [ $n -ge 3 ]",
        c = counter.display()
    );

    let mut runner = Runner::new(fast_config(), silent_logger(), ProcessExecutor);
    runner
        .run(&args(&["3", "sh", "-c", &script]))
        .await
        .unwrap();

    // exactly three executions: two failures, then the success
    let count: u32 = fs::read_to_string(&counter).unwrap().trim().parse().unwrap();
    assert_eq!(count, 3);
}

#[tokio::test]
async fn exhausts_attempts_and_wraps_last_error() {
    let dir = TempDir::new().unwrap();
    let counter = dir.path().join("count");
    let script = format!(
        "n=$(cat {c} 2>/dev/null || echo 0); n=$((n + 1)); echo $n > {c}; exit 3",
        c = counter.display()
    );

    let mut runner = Runner::new(fast_config(), silent_logger(), ProcessExecutor);
    let outcome = runner.run(&args(&["4", "sh", "-c", &script])).await;

    let count: u32 = fs::read_to_string(&counter).unwrap().trim().parse().unwrap();
    assert_eq!(count, 4, "every attempt in the budget runs");
    match outcome {
        Err(RetryError::AllAttemptsFailed { attempts, source }) => {
            assert_eq!(attempts, 4);
            assert!(matches!(*source, RetryError::ExitCode(3)));
        }
        other => panic!("expected AllAttemptsFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn command_timeout_fails_both_attempts() {
    let config = Config {
        delay: Duration::from_millis(10),
        command_timeout: Duration::from_millis(100),
        ..Config::default()
    };
    let mut runner = Runner::new(config, silent_logger(), ProcessExecutor);

    let outcome = runner.run(&args(&["2", "sleep", "5"])).await;
    match outcome {
        Err(RetryError::AllAttemptsFailed { attempts, source }) => {
            assert_eq!(attempts, 2);
            assert!(matches!(*source, RetryError::Timeout(_)));
        }
        other => panic!("expected AllAttemptsFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn overall_timeout_aborts_mid_run() {
    let config = Config {
        delay: Duration::from_millis(10),
        timeout: Duration::from_millis(150),
        ..Config::default()
    };
    let mut runner = Runner::new(config, silent_logger(), ProcessExecutor);

    let outcome = runner.run(&args(&["100", "sleep", "5"])).await;
    assert!(matches!(outcome, Err(RetryError::Timeout(_))));
}

#[tokio::test]
async fn missing_command_is_retried_then_reported() {
    let mut runner = Runner::new(fast_config(), silent_logger(), ProcessExecutor);
    let outcome = runner
        .run(&args(&["2", "nonexistent_command_xyz123"]))
        .await;
    match outcome {
        Err(RetryError::AllAttemptsFailed { attempts, source }) => {
            assert_eq!(attempts, 2);
            assert!(matches!(*source, RetryError::Spawn(_)));
        }
        other => panic!("expected AllAttemptsFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn rejects_bad_attempt_counts_without_running() {
    let dir = TempDir::new().unwrap();
    let marker = dir.path().join("ran");
    let script = format!("touch {}", marker.display());

    let mut runner = Runner::new(fast_config(), silent_logger(), ProcessExecutor);
    for count in ["0", "-1", "abc", "3.5"] {
        let outcome = runner.run(&args(&[count, "sh", "-c", &script])).await;
        assert!(
            matches!(outcome, Err(RetryError::InvalidArgument(_))),
            "count: {count}"
        );
    }
    assert!(!marker.exists(), "no attempt may run on invalid input");
}

#[tokio::test]
async fn deterministic_across_invocations() {
    // same arguments, same deterministic command, same outcome
    for _ in 0..2 {
        let mut runner = Runner::new(fast_config(), silent_logger(), ProcessExecutor);
        let outcome = runner.run(&args(&["2", "false"])).await;
        match outcome {
            Err(RetryError::AllAttemptsFailed { attempts, .. }) => assert_eq!(attempts, 2),
            other => panic!("expected AllAttemptsFailed, got {other:?}"),
        }
    }
}

//! Bounded retry for fallible async operations.
//!
//! Wraps a data-retrieval operation with sequential retry-with-delay
//! semantics: the first successful attempt wins, and after the bound is
//! exhausted only the last attempt's error surfaces. The delay is
//! injected as a closure so the loop itself stays independent of the
//! browser timer (and testable on the host).
//!
//! Known gap: there is no cancellation or timeout interaction with the
//! wrapped operation — if an attempt never settles, no retry happens.
//! Transport timeouts are the caller's concern.

use std::fmt::Display;
use std::future::Future;

/// Bound on attempts and the pause between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one. Values below 1 behave as 1.
    pub max_attempts: u32,
    /// Pause between attempts. Zero means an immediate retry with no
    /// suspension at all.
    pub delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            delay_ms: 1000,
        }
    }
}

/// Runs `op` until it succeeds or `policy.max_attempts` is exhausted.
///
/// Attempts are strictly sequential; `sleep(delay_ms)` is awaited in
/// full between attempts (and skipped entirely when the delay is zero).
/// Each failed non-final attempt is logged at warn level with its index
/// and the configured delay; only the final attempt's error is
/// returned.
pub async fn run_with_retry<T, E, Op, Fut, Sleep, SleepFut>(
    policy: RetryPolicy,
    mut op: Op,
    mut sleep: Sleep,
) -> Result<T, E>
where
    E: Display,
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    Sleep: FnMut(u32) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let total = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if attempt < total => {
                log::warn!(
                    "Intento {} de {} fallido, reintentando en {} ms: {}",
                    attempt,
                    total,
                    policy.delay_ms,
                    err
                );
                if policy.delay_ms > 0 {
                    sleep(policy.delay_ms).await;
                }
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn policy(max_attempts: u32, delay_ms: u32) -> RetryPolicy {
        RetryPolicy {
            max_attempts,
            delay_ms,
        }
    }

    #[test]
    fn first_success_returns_immediately() {
        let calls = Cell::new(0u32);
        let result: Result<u32, String> = block_on(run_with_retry(
            policy(3, 0),
            || {
                calls.set(calls.get() + 1);
                async { Ok(42) }
            },
            |_| async { unreachable!("no retry expected") },
        ));
        assert_eq!(result, Ok(42));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn succeeds_after_failures_within_bound() {
        let calls = Cell::new(0u32);
        let result: Result<u32, String> = block_on(run_with_retry(
            policy(3, 0),
            || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move {
                    if n < 3 {
                        Err(format!("fallo {}", n))
                    } else {
                        Ok(7)
                    }
                }
            },
            |_| async {},
        ));
        assert_eq!(result, Ok(7));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn exhaustion_surfaces_last_error_only() {
        let calls = Cell::new(0u32);
        let result: Result<u32, String> = block_on(run_with_retry(
            policy(3, 0),
            || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move { Err(format!("fallo {}", n)) }
            },
            |_| async {},
        ));
        assert_eq!(result, Err("fallo 3".to_string()));
        assert_eq!(calls.get(), 3);
    }

    #[test]
    fn zero_delay_never_invokes_sleep() {
        let result: Result<u32, String> = block_on(run_with_retry(
            policy(2, 0),
            || async { Err("x".to_string()) },
            |_| async { panic!("sleep with zero delay") },
        ));
        assert!(result.is_err());
    }

    #[test]
    fn sleep_runs_between_attempts_with_configured_delay() {
        let slept = Cell::new(0u32);
        let result: Result<u32, String> = block_on(run_with_retry(
            policy(3, 250),
            || async { Err("x".to_string()) },
            |ms| {
                assert_eq!(ms, 250);
                slept.set(slept.get() + 1);
                async {}
            },
        ));
        assert!(result.is_err());
        // Two pauses for three attempts: never after the final failure.
        assert_eq!(slept.get(), 2);
    }

    #[test]
    fn zero_max_attempts_behaves_as_one() {
        let calls = Cell::new(0u32);
        let result: Result<u32, String> = block_on(run_with_retry(
            policy(0, 0),
            || {
                calls.set(calls.get() + 1);
                async { Err("solo".to_string()) }
            },
            |_| async {},
        ));
        assert_eq!(result, Err("solo".to_string()));
        assert_eq!(calls.get(), 1);
    }
}

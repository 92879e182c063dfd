//! Browser binding of the retry wrapper.
//!
//! The generic loop lives in `contracts::shared::retry`; here it is
//! bound to the browser timer so every api module can wrap its request
//! in one call.

use std::future::Future;

use contracts::shared::retry::{run_with_retry, RetryPolicy};
use gloo_timers::future::TimeoutFuture;

/// Runs `op` under the given policy, pausing on the browser event loop
/// between attempts.
pub async fn retry_with_policy<T, F, Fut>(policy: RetryPolicy, op: F) -> Result<T, String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    run_with_retry(policy, op, TimeoutFuture::new).await
}

/// Runs `op` with the default policy (3 attempts, 1 s between them).
pub async fn with_retry<T, F, Fut>(op: F) -> Result<T, String>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, String>>,
{
    retry_with_policy(RetryPolicy::default(), op).await
}

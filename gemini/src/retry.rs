use std::future::Future;
use std::time::Duration;

use tracing::warn;

use crate::error::GenerateError;

/// Total attempts before the last error is handed back to the caller.
pub const MAX_ATTEMPTS: u32 = 5;

/// Delay before the first retry. Doubles after every retry, no jitter.
pub const INITIAL_BACKOFF: Duration = Duration::from_millis(1000);

/// Run `op` until it succeeds, a non-retryable error occurs, or the
/// attempt budget is spent. The final error is returned unchanged, so a
/// run that is rate-limited on every attempt surfaces `RateLimited`
/// rather than a synthesized "retries exhausted" error.
pub async fn with_backoff<T, F, Fut>(mut op: F) -> Result<T, GenerateError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, GenerateError>>,
{
    let mut delay = INITIAL_BACKOFF;
    let mut attempt = 1;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < MAX_ATTEMPTS => {
                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    error = %err,
                    "generate call failed, retrying"
                );
                tokio::time::sleep(delay).await;
                delay *= 2;
                attempt += 1;
            }
            Err(err) => return Err(err),
        }
    }
}

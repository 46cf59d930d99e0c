// src/provider/retry.rs — Retry with exponential backoff for grading calls
//
// Retries: rate limits (429), server errors (5xx), transport failures, and
// responses that could not be parsed into the expected shape.
// Does NOT retry: missing API key, other 4xx, configuration errors.

use std::fmt;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;

use crate::infra::errors::CoachError;

/// Default retry configuration.
const MAX_ATTEMPTS: u32 = 5;
const INITIAL_DELAY_MS: u64 = 1_000;
const BACKOFF_FACTOR: f64 = 2.0;
const MAX_DELAY_MS: u64 = 16_000;

/// Suspends the caller between attempts. Injected so tests can record
/// delays instead of waiting them out.
#[async_trait]
pub trait Sleeper: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

/// Real sleeper backed by the tokio timer.
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Bounded retry policy: `max_attempts` total tries, sleeping
/// `initial_delay * backoff_factor^n` (capped at `max_delay`) after the
/// n-th failed try. No sleep follows the final attempt.
#[derive(Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub initial_delay: Duration,
    pub backoff_factor: f64,
    pub max_delay: Duration,
    pub retry_if: fn(&CoachError) -> bool,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: MAX_ATTEMPTS,
            initial_delay: Duration::from_millis(INITIAL_DELAY_MS),
            backoff_factor: BACKOFF_FACTOR,
            max_delay: Duration::from_millis(MAX_DELAY_MS),
            retry_if: should_retry,
        }
    }
}

impl fmt::Debug for RetryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RetryPolicy")
            .field("max_attempts", &self.max_attempts)
            .field("initial_delay", &self.initial_delay)
            .field("backoff_factor", &self.backoff_factor)
            .field("max_delay", &self.max_delay)
            .finish_non_exhaustive()
    }
}

impl RetryPolicy {
    /// Delay to wait after the given failed attempt (0-indexed).
    pub fn delay_for_attempt(&self, attempt: u32) -> Duration {
        let base_ms =
            self.initial_delay.as_millis() as f64 * self.backoff_factor.powi(attempt as i32);
        let capped_ms = base_ms.min(self.max_delay.as_millis() as f64).max(0.0);
        Duration::from_millis(capped_ms as u64)
    }

    /// Run `op` until it succeeds, fails with a non-retriable error, or the
    /// attempt budget runs out. `op` receives the 1-based attempt number.
    pub async fn run<T, F, Fut>(
        &self,
        sleeper: &dyn Sleeper,
        label: &str,
        mut op: F,
    ) -> Result<T, CoachError>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, CoachError>>,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;
            let err = match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) => e,
            };

            if !(self.retry_if)(&err) {
                return Err(err);
            }
            if attempt >= max_attempts {
                tracing::warn!(
                    op = label,
                    attempts = attempt,
                    "Retries exhausted: {}",
                    err
                );
                return Err(err);
            }

            let delay = self.delay_for_attempt(attempt - 1);
            tracing::warn!(
                op = label,
                attempt,
                max_attempts,
                delay_ms = delay.as_millis() as u64,
                "Retrying after error: {}",
                err
            );
            sleeper.sleep(delay).await;
        }
    }
}

/// Determine if an error should be retried.
pub fn should_retry(error: &CoachError) -> bool {
    error.is_retriable()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingSleeper {
        delays: Mutex<Vec<Duration>>,
    }

    #[async_trait]
    impl Sleeper for RecordingSleeper {
        async fn sleep(&self, duration: Duration) {
            self.delays.lock().unwrap().push(duration);
        }
    }

    fn server_error() -> CoachError {
        CoachError::Provider {
            provider: "test".into(),
            message: "HTTP 500".into(),
            retriable: true,
        }
    }

    #[test]
    fn test_default_policy() {
        let p = RetryPolicy::default();
        assert_eq!(p.max_attempts, 5);
        assert_eq!(p.initial_delay, Duration::from_millis(1000));
        assert_eq!(p.backoff_factor, 2.0);
        assert_eq!(p.max_delay, Duration::from_millis(16_000));
    }

    #[test]
    fn test_delay_doubles() {
        let p = RetryPolicy::default();
        let delays: Vec<u128> = (0..5).map(|a| p.delay_for_attempt(a).as_millis()).collect();
        assert_eq!(delays, vec![1000, 2000, 4000, 8000, 16000]);
    }

    #[test]
    fn test_delay_capped_at_max() {
        let p = RetryPolicy::default();
        assert_eq!(p.delay_for_attempt(10), Duration::from_millis(16_000));
    }

    #[test]
    fn test_should_retry_classification() {
        assert!(should_retry(&server_error()));
        assert!(should_retry(&CoachError::RateLimited {
            provider: "test".into()
        }));
        assert!(should_retry(&CoachError::MalformedResponse("bad json".into())));
        assert!(!should_retry(&CoachError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_succeeds_after_transient_failures() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let result = RetryPolicy::default()
            .run(&sleeper, "test", |attempt| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move {
                    if attempt < 3 {
                        Err(server_error())
                    } else {
                        Ok(attempt)
                    }
                }
            })
            .await
            .unwrap();

        assert_eq!(result, 3);
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        assert_eq!(
            *sleeper.delays.lock().unwrap(),
            vec![Duration::from_millis(1000), Duration::from_millis(2000)]
        );
    }

    #[tokio::test]
    async fn test_exhaustion_returns_last_error_without_final_sleep() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let err = RetryPolicy::default()
            .run(&sleeper, "test", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(server_error()) }
            })
            .await
            .unwrap_err();

        assert!(err.to_string().contains("HTTP 500"));
        assert_eq!(calls.load(Ordering::SeqCst), 5);
        assert_eq!(sleeper.delays.lock().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn test_non_retriable_fails_fast() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);

        let err = RetryPolicy::default()
            .run(&sleeper, "test", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(CoachError::MissingApiKey) }
            })
            .await
            .unwrap_err();

        assert!(matches!(err, CoachError::MissingApiKey));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(sleeper.delays.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_custom_predicate_overrides_default() {
        let sleeper = RecordingSleeper::default();
        let calls = AtomicU32::new(0);
        let policy = RetryPolicy {
            retry_if: |e| !matches!(e, CoachError::MalformedResponse(_)),
            ..RetryPolicy::default()
        };

        let _ = policy
            .run(&sleeper, "test", |_| {
                calls.fetch_add(1, Ordering::SeqCst);
                async { Err::<(), _>(CoachError::MalformedResponse("schema changed".into())) }
            })
            .await;

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_tokio_sleeper_waits() {
        let start = tokio::time::Instant::now();
        TokioSleeper.sleep(Duration::from_millis(5)).await;
        assert!(start.elapsed() >= Duration::from_millis(5));
    }
}

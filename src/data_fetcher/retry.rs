//! Fixed-delay retry executor
//!
//! Runs a fallible async operation up to `max_retries` times and reports the
//! final failure as `None` instead of an error. Waiting goes through a
//! [`Sleeper`] so tests can observe the delays without sleeping, and so a
//! caller can cancel a pending wait by dropping the future.

use crate::constants::retry;
use crate::error::AppError;
use std::future::Future;
use std::time::Duration;
use tracing::{debug, warn};

/// How many times to try and how long to wait in between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_retries: u32, delay: Duration) -> Self {
        Self { max_retries, delay }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: retry::MAX_RETRIES,
            delay: Duration::from_secs(retry::DELAY_SECONDS),
        }
    }
}

/// Something that can wait for a given duration.
pub trait Sleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Sleeps on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

impl Sleeper for TokioSleeper {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}

/// Invokes `operation` until it succeeds or `policy.max_retries` attempts have failed.
///
/// Every failure is logged at warn level. Between attempts the executor waits
/// `policy.delay` (no backoff growth); there is no wait after the last attempt.
/// Exhaustion returns `None`, never an error, so callers must treat `None` as
/// "give up".
pub async fn with_retry<T, F, Fut, S>(
    policy: &RetryPolicy,
    sleeper: &S,
    mut operation: F,
) -> Option<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
    S: Sleeper,
{
    for attempt in 1..=policy.max_retries {
        match operation().await {
            Ok(value) => {
                if attempt > 1 {
                    debug!("Succeeded on attempt {attempt}/{}", policy.max_retries);
                }
                return Some(value);
            }
            Err(e) => {
                warn!(
                    "Attempt {}/{} failed: {}",
                    attempt, policy.max_retries, e
                );
                if attempt < policy.max_retries {
                    sleeper.sleep(policy.delay).await;
                }
            }
        }
    }
    None
}

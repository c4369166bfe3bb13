//! Poll a condition until it yields a value or a deadline passes.

use std::time::Duration;

use tokio::time::{sleep, Instant};
use tracing::{debug, trace};

use crate::config::PollConfig;
use crate::error::KitError;

pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(2000);
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Overall deadline. Zero means [`DEFAULT_TIMEOUT`].
    pub timeout: Duration,
    /// Pause between checks.
    pub interval: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self { timeout: DEFAULT_TIMEOUT, interval: DEFAULT_INTERVAL }
    }
}

impl From<&PollConfig> for PollOptions {
    fn from(cfg: &PollConfig) -> Self {
        Self {
            timeout: Duration::from_millis(cfg.timeout_ms),
            interval: Duration::from_millis(cfg.interval_ms),
        }
    }
}

/// Call `check` now and then every `options.interval` until it returns
/// `Some`. Fails with [`KitError::PollTimeout`] when a check comes back
/// `None` after the deadline.
pub async fn poll<T, F>(mut check: F, options: PollOptions) -> Result<T, KitError>
where
    F: FnMut() -> Option<T>,
{
    let timeout = if options.timeout.is_zero() {
        DEFAULT_TIMEOUT
    } else {
        options.timeout
    };
    let start = Instant::now();
    let deadline = start + timeout;
    let mut attempts: u32 = 0;

    loop {
        attempts += 1;
        if let Some(value) = check() {
            debug!(attempts, elapsed_ms = start.elapsed().as_millis() as u64, "poll condition met");
            return Ok(value);
        }
        if Instant::now() >= deadline {
            let waited_ms = start.elapsed().as_millis() as u64;
            debug!(attempts, waited_ms, "poll timed out");
            return Err(KitError::PollTimeout { waited_ms });
        }
        trace!(attempts, "poll condition not met, retrying");
        sleep(options.interval).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(timeout_ms: u64, interval_ms: u64) -> PollOptions {
        PollOptions {
            timeout: Duration::from_millis(timeout_ms),
            interval: Duration::from_millis(interval_ms),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_immediately_when_ready() {
        let start = Instant::now();
        let v = poll(|| Some(42), PollOptions::default()).await.unwrap();
        assert_eq!(v, 42);
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn resolves_after_a_few_checks() {
        let mut checks = 0;
        let start = Instant::now();
        let v = poll(
            || {
                checks += 1;
                (checks == 3).then_some("ready")
            },
            opts(1000, 150),
        )
        .await
        .unwrap();
        assert_eq!(v, "ready");
        assert_eq!(start.elapsed(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn times_out() {
        let err = poll(|| None::<()>, opts(500, 100)).await.unwrap_err();
        match err {
            KitError::PollTimeout { waited_ms } => assert_eq!(waited_ms, 500),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn zero_timeout_uses_default() {
        let err = poll(|| None::<()>, opts(0, 100)).await.unwrap_err();
        assert!(matches!(err, KitError::PollTimeout { waited_ms: 2000 }));
    }

    #[test]
    fn options_from_config() {
        let cfg = PollConfig { timeout_ms: 30, interval_ms: 5 };
        assert_eq!(PollOptions::from(&cfg), opts(30, 5));
    }
}

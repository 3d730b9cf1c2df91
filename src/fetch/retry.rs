// retry.rs - Bounded retries with exponential backoff

use std::thread;
use std::time::Duration;

use super::client::PageFetcher;
use super::error::FetchError;

/// How many times to try a URL and how long to wait in between.
///
/// The wait before attempt `n + 1` is `base_delay * 2^(n - 1)`: 1 s, 2 s, 4 s, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub const fn new(max_attempts: u32, base_delay: Duration) -> Self {
        Self {
            max_attempts,
            base_delay,
        }
    }

    /// Policy for the landing page, which everything else depends on.
    pub const fn landing() -> Self {
        Self::new(5, Duration::from_secs(1))
    }

    /// Policy for polymer pages and sequence lookups.
    pub const fn page() -> Self {
        Self::new(3, Duration::from_secs(1))
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Backoff to sleep after failed attempt number `attempt` (1-based).
    pub fn delay_after(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        self.base_delay.saturating_mul(1u32 << exponent)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::page()
    }
}

/// Fetch `url`, retrying failed attempts according to `policy`.
///
/// Each failure is logged; after the last one the error is returned wrapped in
/// [`FetchError::Exhausted`].
pub fn fetch_with_retries<F: PageFetcher + ?Sized>(
    fetcher: &F,
    url: &str,
    policy: &RetryPolicy,
) -> Result<String, FetchError> {
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 0;

    loop {
        attempt += 1;
        match fetcher.fetch_text(url) {
            Ok(text) => return Ok(text),
            Err(e) if attempt >= attempts => {
                tracing::warn!(attempt, url, error = %e, "Error fetching page");
                tracing::error!(url, attempts, "Failed to fetch URL after all attempts");
                return Err(FetchError::Exhausted {
                    url: url.to_string(),
                    attempts,
                    last: Box::new(e),
                });
            }
            Err(e) => {
                tracing::warn!(attempt, url, error = %e, "Error fetching page");
                let delay = policy.delay_after(attempt);
                tracing::info!("Retrying after {:.1} seconds...", delay.as_secs_f64());
                thread::sleep(delay);
            }
        }
    }
}

//! Request spacing for the iRail API.

use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::Instant;

/// Enforces a minimum interval between consecutive requests.
///
/// The lock is held while waiting, so concurrent callers are released one
/// at a time, each at least `interval` after the previous one.
#[derive(Debug)]
pub struct RateLimiter {
    interval: Duration,
    last: Mutex<Option<Instant>>,
}

impl RateLimiter {
    /// Create a limiter with the given minimum spacing.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: Mutex::new(None),
        }
    }

    /// Create a limiter allowing `requests_per_second` requests.
    ///
    /// Returns `None` unless the rate is finite and positive.
    pub fn per_second(requests_per_second: f64) -> Option<Self> {
        if !requests_per_second.is_finite() || requests_per_second <= 0.0 {
            return None;
        }
        Some(Self::new(Duration::from_secs_f64(1.0 / requests_per_second)))
    }

    /// The minimum spacing between requests.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Wait until the next request may be sent.
    pub async fn wait(&self) {
        let mut last = self.last.lock().await;
        if let Some(previous) = *last {
            let ready_at = previous + self.interval;
            if ready_at > Instant::now() {
                tokio::time::sleep_until(ready_at).await;
            }
        }
        *last = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn interval_from_rate() {
        let limiter = RateLimiter::per_second(10.0).unwrap();
        assert_eq!(limiter.interval(), Duration::from_millis(100));

        let limiter = RateLimiter::per_second(3.0).unwrap();
        let expected = 1.0 / 3.0;
        assert!((limiter.interval().as_secs_f64() - expected).abs() < 0.001);
    }

    #[test]
    fn rejects_invalid_rates() {
        assert!(RateLimiter::per_second(0.0).is_none());
        assert!(RateLimiter::per_second(-1.0).is_none());
        assert!(RateLimiter::per_second(f64::NAN).is_none());
        assert!(RateLimiter::per_second(f64::INFINITY).is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn first_request_is_immediate() {
        let limiter = RateLimiter::per_second(1.0).unwrap();
        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn spaces_sequential_requests() {
        let limiter = RateLimiter::per_second(10.0).unwrap();
        let start = Instant::now();
        for _ in 0..5 {
            limiter.wait().await;
        }
        // Four gaps of 100ms after the first request
        assert!(start.elapsed() >= Duration::from_millis(400));
    }

    #[tokio::test(start_paused = true)]
    async fn spaces_concurrent_requests() {
        let limiter = Arc::new(RateLimiter::per_second(4.0).unwrap());
        let start = Instant::now();

        let tasks: Vec<_> = (0..4)
            .map(|_| {
                let limiter = limiter.clone();
                tokio::spawn(async move {
                    limiter.wait().await;
                    Instant::now()
                })
            })
            .collect();

        let mut released = Vec::new();
        for task in tasks {
            released.push(task.await.unwrap());
        }
        released.sort();

        for pair in released.windows(2) {
            assert!(pair[1] - pair[0] >= Duration::from_millis(250));
        }
        assert!(start.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test(start_paused = true)]
    async fn no_wait_after_idle_period() {
        let limiter = RateLimiter::per_second(2.0).unwrap();
        limiter.wait().await;
        tokio::time::sleep(Duration::from_secs(1)).await;

        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }
}

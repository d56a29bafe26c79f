use embassy_time::{Duration, Timer};

use crate::error::DelayError;

/// Suspends the calling task for a duration.
///
/// Unlike a bare timer await, the outcome is returned so the caller has to
/// decide what a failed wait means.
pub trait TaskDelay {
    async fn delay(&mut self, duration: Duration) -> Result<(), DelayError>;
}

/// [`TaskDelay`] backed by the embassy time driver.
#[derive(Debug, Default, Clone, Copy)]
pub struct ExecutorDelay;

impl TaskDelay for ExecutorDelay {
    async fn delay(&mut self, duration: Duration) -> Result<(), DelayError> {
        if duration.as_ticks() == 0 {
            return Err(DelayError::InvalidParameter);
        }
        Timer::after(duration).await;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use embassy_time::Instant;

    use super::*;

    #[tokio::test]
    async fn zero_duration_is_rejected() {
        let mut delay = ExecutorDelay;
        assert_eq!(delay.delay(Duration::from_ticks(0)).await, Err(DelayError::InvalidParameter));
    }

    #[tokio::test]
    async fn delay_waits_at_least_the_duration() {
        let mut delay = ExecutorDelay;
        let start = Instant::now();
        delay.delay(Duration::from_millis(20)).await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}

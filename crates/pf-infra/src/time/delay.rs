use std::time::Duration;

use async_trait::async_trait;
use pf_core::ports::DelayPort;
use tracing::trace;

/// Delay backed by the tokio timer. Used by native tooling and tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct TokioDelay;

#[async_trait(?Send)]
impl DelayPort for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        trace!(?duration, "sleeping");
        tokio::time::sleep(duration).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    async fn sleep_waits_for_the_full_duration() {
        let start = Instant::now();
        TokioDelay.sleep(Duration::from_millis(500)).await;
        assert_eq!(start.elapsed(), Duration::from_millis(500));
    }
}

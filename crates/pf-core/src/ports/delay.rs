use std::time::Duration;

/// Suspends the current task for a fixed duration.
#[async_trait::async_trait(?Send)]
pub trait DelayPort: Send + Sync {
    async fn sleep(&self, duration: Duration);
}

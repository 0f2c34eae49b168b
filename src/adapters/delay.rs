use std::time::Duration;

use async_trait::async_trait;
use futures::channel::oneshot;
use leptos::prelude::set_timeout;

use pf_core::ports::DelayPort;

/// Delay backed by `window.setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDelay;

#[async_trait(?Send)]
impl DelayPort for BrowserDelay {
    async fn sleep(&self, duration: Duration) {
        let (done, elapsed) = oneshot::channel::<()>();
        set_timeout(
            move || {
                let _ = done.send(());
            },
            duration,
        );
        // A dropped sender only happens on page teardown.
        let _ = elapsed.await;
    }
}

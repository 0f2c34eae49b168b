//! View liveness.
//!
//! A [`MountGuard`] is created when a view mounts and flipped when it unmounts.
//! Async work checks it after every await before touching view state.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl MountGuard {
    pub fn new() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Marks the view as gone. Idempotent.
    pub fn unmount(&self) {
        if self.mounted.swap(false, Ordering::AcqRel) {
            debug!("view unmounted");
        }
    }
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::new()
    }
}

/// Hands out one [`MountGuard`] per run of an effect that re-runs on input
/// changes. Starting a run unmounts the previous one, so a superseded run can
/// no longer reach the view.
#[derive(Debug, Default)]
pub struct RunGuards {
    current: Mutex<Option<MountGuard>>,
}

impl RunGuards {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> MountGuard {
        let next = MountGuard::new();
        if let Some(previous) = self.slot().replace(next.clone()) {
            previous.unmount();
        }
        next
    }

    /// Unmounts the latest run. Call on view cleanup.
    pub fn stop(&self) {
        if let Some(current) = self.slot().take() {
            current.unmount();
        }
    }

    fn slot(&self) -> MutexGuard<'_, Option<MountGuard>> {
        self.current
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_liveness() {
        let guard = MountGuard::new();
        let observer = guard.clone();
        assert!(observer.is_mounted());
        guard.unmount();
        guard.unmount();
        assert!(!observer.is_mounted());
    }

    #[test]
    fn starting_a_run_retires_the_previous_one() {
        let runs = RunGuards::new();
        let first = runs.start();
        let second = runs.start();
        assert!(!first.is_mounted());
        assert!(second.is_mounted());
        runs.stop();
        assert!(!second.is_mounted());
    }
}

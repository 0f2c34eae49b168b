use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use pf_core::contact::{ContactAction, ContactFormState};

use crate::lifecycle::MountGuard;

/// Shared contact form context: current state, single-flight flag and liveness.
///
/// The state lock is never held across an await.
pub struct ContactContext {
    state: Mutex<ContactFormState>,
    in_flight: AtomicBool,
    mount: MountGuard,
}

/// Clears the single-flight flag when dropped.
pub(crate) struct InFlightGuard<'a> {
    flag: &'a AtomicBool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl ContactContext {
    pub fn new(mount: MountGuard) -> Self {
        Self {
            state: Mutex::new(ContactFormState::default()),
            in_flight: AtomicBool::new(false),
            mount,
        }
    }

    pub fn get_state(&self) -> ContactFormState {
        self.lock_state().clone()
    }

    pub fn is_mounted(&self) -> bool {
        self.mount.is_mounted()
    }

    pub fn mount(&self) -> &MountGuard {
        &self.mount
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Claims the single submission slot, or `None` when it is taken.
    pub(crate) fn try_begin_submission(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard {
                flag: &self.in_flight,
            })
    }

    /// Replaces the state with the result of `transition`.
    /// Returns the previous state, the new state and the produced actions.
    pub(crate) fn apply<F>(
        &self,
        transition: F,
    ) -> (ContactFormState, ContactFormState, Vec<ContactAction>)
    where
        F: FnOnce(ContactFormState) -> (ContactFormState, Vec<ContactAction>),
    {
        let mut guard = self.lock_state();
        let previous = guard.clone();
        let (next, actions) = transition(previous.clone());
        *guard = next.clone();
        (previous, next, actions)
    }

    fn lock_state(&self) -> MutexGuard<'_, ContactFormState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_flight_slot_is_released_on_drop() {
        let context = ContactContext::new(MountGuard::new());
        let first = context.try_begin_submission();
        assert!(first.is_some());
        assert!(context.try_begin_submission().is_none());
        drop(first);
        assert!(!context.is_in_flight());
        assert!(context.try_begin_submission().is_some());
    }
}

//! Page-wide reveal tracking.
//!
//! One tracker per mounted project list. Scroll events update the shared
//! direction and are broadcast to every tracked card, so hidden cards always
//! wait on the side the page currently scrolls from. Each card feeds its own
//! visibility stream through [`RevealTracker::track`].

use std::sync::{Mutex, MutexGuard};

use futures::channel::mpsc;
use futures::future;
use futures::stream::{self, StreamExt};
use tracing::{debug, trace};

use pf_core::ports::VisibilityStream;
use pf_core::reveal::{RevealState, RevealTransition, ScrollDirection, ScrollTracker};

use crate::lifecycle::MountGuard;

enum CardSignal {
    Visibility(bool),
    Direction(ScrollDirection),
    Ended,
}

#[derive(Debug, Default)]
pub struct RevealTracker {
    scroll: Mutex<ScrollTracker>,
    direction_listeners: Mutex<Vec<mpsc::UnboundedSender<ScrollDirection>>>,
}

impl RevealTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a scroll event and notifies tracked cards when the direction
    /// flips.
    pub fn on_scroll(&self, current_scroll_y: f64) -> ScrollDirection {
        let (previous, direction) = {
            let mut scroll = self.lock_scroll();
            let previous = scroll.direction();
            (previous, scroll.on_scroll(current_scroll_y))
        };
        trace!(current_scroll_y, ?direction, "scroll");

        if direction != previous {
            lock(&self.direction_listeners)
                .retain(|listener| listener.unbounded_send(direction).is_ok());
        }
        direction
    }

    pub fn direction(&self) -> ScrollDirection {
        self.lock_scroll().direction()
    }

    /// Applies a visibility observation using the current scroll direction.
    pub fn on_visibility(&self, state: RevealState, visible: bool) -> RevealTransition {
        state.observe(visible, self.direction())
    }

    /// Consumes a card's visibility stream until it ends or the view unmounts.
    ///
    /// `apply` receives every new state, including hidden poses re-aimed after
    /// a direction change. Returns the number of entrances played.
    pub async fn track<F>(
        &self,
        visibility: VisibilityStream,
        mount: MountGuard,
        mut apply: F,
    ) -> usize
    where
        F: FnMut(RevealState),
    {
        let (listener, directions) = mpsc::unbounded();
        lock(&self.direction_listeners).push(listener);

        let visibility = visibility
            .map(CardSignal::Visibility)
            .chain(stream::once(future::ready(CardSignal::Ended)));
        let mut signals = stream::select(visibility, directions.map(CardSignal::Direction));

        let mut state = RevealState::default().facing(self.direction());
        if state != RevealState::default() {
            apply(state);
        }
        let mut entrances = 0;

        while let Some(signal) = signals.next().await {
            if !mount.is_mounted() {
                debug!("reveal signal after unmount; stopping reveal tracking");
                break;
            }
            match signal {
                CardSignal::Visibility(visible) => {
                    let transition = self.on_visibility(state, visible);
                    if transition.entered {
                        entrances += 1;
                        trace!(direction = ?transition.state.direction, "card entrance");
                    }
                    state = transition.state;
                    apply(state);
                }
                CardSignal::Direction(direction) => {
                    let aimed = state.facing(direction);
                    if aimed != state {
                        state = aimed;
                        apply(state);
                    }
                }
                CardSignal::Ended => break,
            }
        }

        entrances
    }

    fn lock_scroll(&self) -> MutexGuard<'_, ScrollTracker> {
        lock(&self.scroll)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

//! Scroll-driven reveal animation bookkeeping.
//!
//! A single [`ScrollTracker`] per page derives the scroll direction; each card
//! keeps its own [`RevealState`] fed by visibility changes.

mod scroll;
mod state;
mod visibility;

pub use scroll::{ScrollDirection, ScrollTracker};
pub use state::{RevealState, RevealTransition, ENTRANCE_OFFSET_PX};
pub use visibility::{
    visible_fraction, Rect, Viewport, VisibilityGate, DEFAULT_VISIBILITY_THRESHOLD,
};

//! Browser implementations of the `pf-core` ports, plus the small DOM helpers
//! the components share.

mod contact_events;
mod delay;
mod navigation;
mod scroll;
mod visibility;

pub use contact_events::SignalContactEvents;
pub use delay::BrowserDelay;
pub use navigation::perform;
pub use scroll::{current_scroll_y, scroll_to_anchor};
pub use visibility::DomVisibilityObserver;

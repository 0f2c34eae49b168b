//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases in `pf-app` and the
//! adapters in `pf-infra` or the browser UI.
//!
//! Futures returned by ports are not required to be `Send`: browser-backed
//! adapters run on a single-threaded event loop. The port objects themselves
//! are `Send + Sync` so they can be shared through `Arc`.

mod analytics;
mod clock;
mod contact_events;
mod delay;
mod email;
mod visibility;

pub use analytics::{AnalyticsError, AnalyticsPort};
pub use clock::ClockPort;
pub use contact_events::ContactEventPort;
pub use delay::DelayPort;
pub use email::{EmailReceipt, EmailSendError, EmailSenderPort};
pub use visibility::{VisibilityObserverPort, VisibilityStream};

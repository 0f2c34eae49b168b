//! Contact form use cases.

mod context;
mod orchestrator;

pub use context::ContactContext;
pub use orchestrator::{ContactError, ContactOrchestrator};

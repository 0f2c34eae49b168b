pub mod analytics;
pub mod contact;
pub mod navigation;
pub mod project;
pub mod reveal;

pub use analytics::InitializeAnalytics;
pub use contact::{ContactError, ContactOrchestrator};
pub use navigation::{Navigate, NavigationCommand};
pub use project::{ProjectDetailOutcome, ResolveProject, ResolveProjectError};
pub use reveal::RevealTracker;

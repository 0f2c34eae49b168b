//! Startup: configuration, logging, dependency wiring and mounting.

pub mod config;
pub mod run;
pub mod tracing;
pub mod wiring;

pub use config::load_site_config;
pub use run::run;
pub use self::tracing::init_tracing_subscriber;
pub use wiring::{build_app, wire_dependencies};

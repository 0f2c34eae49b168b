//! Infrastructure adapters for the portfolio site.
//!
//! Implements the `pf-core` ports against real services: the EmailJS REST
//! API, TOML configuration, timers and the system clock.

pub mod analytics;
pub mod config;
pub mod email;
pub mod time;

pub use analytics::LoggingAnalytics;
pub use config::{load_config, parse_config, ConfigError};
pub use email::{EmailClientError, EmailJsClient};
pub use time::SystemClock;
#[cfg(not(target_arch = "wasm32"))]
pub use time::TokioDelay;

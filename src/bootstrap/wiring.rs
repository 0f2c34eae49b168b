//! # Dependency wiring
//!
//! ## Responsibilities
//!
//! - Create the infrastructure adapters (EmailJS client, clock, analytics)
//! - Create the browser adapters (timer-backed delay)
//! - Inject them into [`App`] through the port traits
//!
//! ## Prohibited
//!
//! - **No business logic**: what happens on submit or on an unknown project id
//!   is decided by the use cases
//! - **No configuration validation**: catalog rules live in `pf-core`
//!
//! This is the only place that depends on `pf-infra`, the browser adapters and
//! `pf-app` at the same time.

use std::sync::Arc;

use pf_app::{App, AppDeps, AppError};
use pf_core::config::SiteConfig;
use pf_infra::{EmailClientError, EmailJsClient, LoggingAnalytics, SystemClock};
use tracing::debug;

use crate::adapters::BrowserDelay;

/// Result type for wiring operations
pub type WiringResult<T> = Result<T, WiringError>;

/// Errors during dependency injection
#[derive(Debug, thiserror::Error)]
pub enum WiringError {
    #[error("Email client initialization failed: {0}")]
    EmailClient(#[from] EmailClientError),

    #[error("App assembly failed: {0}")]
    App(#[from] AppError),
}

/// Build the port implementations for `config`.
pub fn wire_dependencies(config: &SiteConfig) -> WiringResult<AppDeps> {
    let email_sender = EmailJsClient::new(&config.email)?;
    debug!(endpoint = %email_sender.endpoint(), "email client ready");

    Ok(AppDeps {
        email_sender: Arc::new(email_sender),
        delay: Arc::new(BrowserDelay),
        clock: Arc::new(SystemClock),
        analytics: Arc::new(LoggingAnalytics::new()),
    })
}

/// Wire dependencies and assemble the application.
pub fn build_app(config: SiteConfig) -> WiringResult<App> {
    let deps = wire_dependencies(&config)?;
    Ok(App::new(config, deps)?)
}

//! # Application Dependencies
//!
//! Dependency grouping for [`crate::App`] construction. Not a builder: no
//! defaults, no optional fields, no hidden steps.

use std::sync::Arc;

use pf_core::ports::{AnalyticsPort, ClockPort, DelayPort, EmailSenderPort};

pub struct AppDeps {
    // Contact form
    pub email_sender: Arc<dyn EmailSenderPort>,

    // Timing
    pub delay: Arc<dyn DelayPort>,
    pub clock: Arc<dyn ClockPort>,

    // Startup
    pub analytics: Arc<dyn AnalyticsPort>,
}

//! Analytics initializer that records the configured provider app.
//!
//! The site only needs the provider started once with its app config; there
//! is no event tracking. This adapter checks the identifiers and records
//! which project was started.

use std::sync::{Mutex, PoisonError};

use tracing::info;

use pf_core::config::AnalyticsConfig;
use pf_core::ports::{AnalyticsError, AnalyticsPort};

#[derive(Debug, Default)]
pub struct LoggingAnalytics {
    started: Mutex<Option<String>>,
}

impl LoggingAnalytics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Project id of the started provider app, if any.
    pub fn started_project(&self) -> Option<String> {
        self.started
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl AnalyticsPort for LoggingAnalytics {
    fn initialize(&self, config: &AnalyticsConfig) -> Result<(), AnalyticsError> {
        let required = [
            ("project_id", &config.project_id),
            ("app_id", &config.app_id),
        ];
        if let Some((name, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
            return Err(AnalyticsError::MissingField(*name));
        }

        info!(
            project_id = %config.project_id,
            measurement_id = %config.measurement_id,
            auth_domain = %config.auth_domain,
            "analytics initialized"
        );
        *self.started.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(config.project_id.clone());
        Ok(())
    }
}

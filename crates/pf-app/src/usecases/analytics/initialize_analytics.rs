//! Use case for starting the analytics provider once per session.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tracing::{info, info_span};

use pf_core::config::AnalyticsConfig;
use pf_core::ports::{AnalyticsError, AnalyticsPort};

pub struct InitializeAnalytics {
    analytics: Arc<dyn AnalyticsPort>,
    initialized: AtomicBool,
}

impl InitializeAnalytics {
    pub fn new(analytics: Arc<dyn AnalyticsPort>) -> Self {
        Self {
            analytics,
            initialized: AtomicBool::new(false),
        }
    }

    /// Returns `Ok(true)` when the provider was started by this call.
    ///
    /// Disabled configurations and repeated calls return `Ok(false)`.
    /// A failed start may be retried.
    pub fn execute(&self, config: &AnalyticsConfig) -> Result<bool, AnalyticsError> {
        let _span = info_span!("usecase.initialize_analytics.execute").entered();

        if !config.enabled {
            info!("analytics disabled");
            return Ok(false);
        }
        if self.initialized.swap(true, Ordering::AcqRel) {
            return Ok(false);
        }

        if let Err(err) = self.analytics.initialize(config) {
            self.initialized.store(false, Ordering::Release);
            return Err(err);
        }
        Ok(true)
    }
}

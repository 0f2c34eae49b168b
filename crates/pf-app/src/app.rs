//! Application runtime assembled from [`SiteConfig`] and [`AppDeps`].

use std::sync::Arc;

use chrono::{DateTime, Datelike, Utc};
use tracing::info;

use pf_core::catalog::{CatalogError, ProjectCatalog};
use pf_core::config::SiteConfig;
use pf_core::ports::{AnalyticsError, ContactEventPort};

use crate::deps::AppDeps;
use crate::usecases::{
    ContactOrchestrator, InitializeAnalytics, Navigate, ResolveProject, RevealTracker,
};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid project catalog: {0}")]
    Catalog(#[from] CatalogError),
}

/// The portfolio application: configuration, catalog and use cases.
///
/// Created once at startup and shared by every view. View-scoped use cases
/// (contact form, reveal tracker) are created per mount.
pub struct App {
    config: Arc<SiteConfig>,
    catalog: Arc<ProjectCatalog>,
    deps: AppDeps,
    resolve_project: Arc<ResolveProject>,
    initialize_analytics: InitializeAnalytics,
    navigate: Navigate,
}

impl App {
    /// This constructor signature is the dependency manifest.
    pub fn new(config: SiteConfig, deps: AppDeps) -> Result<Self, AppError> {
        let catalog = Arc::new(ProjectCatalog::new(config.projects.clone())?);
        let resolve_project = Arc::new(ResolveProject::new(
            catalog.clone(),
            deps.delay.clone(),
            config.timing.detail_load_delay(),
        ));
        let initialize_analytics = InitializeAnalytics::new(deps.analytics.clone());

        info!(projects = catalog.len(), "portfolio app assembled");

        Ok(Self {
            config: Arc::new(config),
            catalog,
            deps,
            resolve_project,
            initialize_analytics,
            navigate: Navigate::new(),
        })
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn catalog(&self) -> Arc<ProjectCatalog> {
        self.catalog.clone()
    }

    pub fn resolve_project(&self) -> Arc<ResolveProject> {
        self.resolve_project.clone()
    }

    pub fn navigate(&self) -> Navigate {
        self.navigate
    }

    /// New contact form bound to `event_port`. One per mounted form.
    pub fn contact_form(&self, event_port: Arc<dyn ContactEventPort>) -> ContactOrchestrator {
        ContactOrchestrator::new(
            self.deps.email_sender.clone(),
            self.deps.delay.clone(),
            event_port,
            self.config.timing.feedback_auto_hide(),
        )
    }

    /// New reveal tracker. One per mounted project list.
    pub fn reveal_tracker(&self) -> Arc<RevealTracker> {
        Arc::new(RevealTracker::new())
    }

    pub fn initialize_analytics(&self) -> Result<bool, AnalyticsError> {
        self.initialize_analytics.execute(&self.config.analytics)
    }

    /// Calendar year according to the clock port, for the footer.
    pub fn current_year(&self) -> i32 {
        DateTime::<Utc>::from_timestamp_millis(self.deps.clock.now_ms())
            .map(|now| now.year())
            .unwrap_or(1970)
    }
}

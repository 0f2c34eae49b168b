//! Use case for resolving the project shown by the detail view.

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, info_span, warn, Instrument};

use pf_core::catalog::{ProjectCatalog, ProjectRecord, Resolution};
use pf_core::navigation::NavigationTarget;
use pf_core::ports::DelayPort;

use crate::lifecycle::MountGuard;

/// What the detail view should do once resolution completes.
#[derive(Debug, Clone, PartialEq)]
pub enum ProjectDetailOutcome {
    Show(ProjectRecord),
    /// Unknown or malformed id: leave the detail view.
    Redirect(NavigationTarget),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveProjectError {
    #[error("project view unmounted before resolution completed")]
    Unmounted,
}

/// Resolves a route id against the catalog.
///
/// ## Behavior
/// - Waits for the configured load delay so the placeholder is shown
/// - Resolves the raw id against the catalog
/// - Redirects home when the project does not exist
pub struct ResolveProject {
    catalog: Arc<ProjectCatalog>,
    delay: Arc<dyn DelayPort>,
    load_delay: Duration,
}

impl ResolveProject {
    pub fn new(
        catalog: Arc<ProjectCatalog>,
        delay: Arc<dyn DelayPort>,
        load_delay: Duration,
    ) -> Self {
        Self {
            catalog,
            delay,
            load_delay,
        }
    }

    pub async fn execute(
        &self,
        raw_id: &str,
        mount: &MountGuard,
    ) -> Result<ProjectDetailOutcome, ResolveProjectError> {
        let span = info_span!("usecase.resolve_project.execute", id = raw_id);

        async {
            if !self.load_delay.is_zero() {
                self.delay.sleep(self.load_delay).await;
            }

            if !mount.is_mounted() {
                warn!("project detail unmounted while loading; dropping resolution");
                return Err(ResolveProjectError::Unmounted);
            }

            match self.catalog.resolve(raw_id) {
                Resolution::Found(project) => {
                    info!(title = %project.title, "project resolved");
                    Ok(ProjectDetailOutcome::Show(project))
                }
                Resolution::NotFound { requested } => {
                    warn!(requested = %requested, "project not found; redirecting home");
                    Ok(ProjectDetailOutcome::Redirect(NavigationTarget::home()))
                }
            }
        }
        .instrument(span)
        .await
    }
}

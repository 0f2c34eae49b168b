//! Translates navigation targets into commands for the router.

use tracing::{debug, info_span, warn};

use pf_core::navigation::{NavigationTarget, View, HOME_PATH};

/// What the UI router should do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationCommand {
    /// Push a new history entry and render its view.
    Push(String),
    /// Replace the current history entry.
    Replace(String),
    /// Smooth-scroll to an element id on the current page.
    ScrollTo(String),
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Navigate;

impl Navigate {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, target: NavigationTarget) -> NavigationCommand {
        let _span = info_span!("usecase.navigate.execute").entered();

        match target {
            NavigationTarget::Route(route) => match View::parse(&route.path) {
                View::Unknown { path } => {
                    warn!(path = %path, "navigation to unknown route; going home");
                    NavigationCommand::Replace(HOME_PATH.to_string())
                }
                view => {
                    debug!(path = %route.path, "route navigation");
                    NavigationCommand::Push(view.path())
                }
            },
            NavigationTarget::Scroll(scroll) => {
                debug!(anchor = %scroll.section_anchor_id, "scroll navigation");
                NavigationCommand::ScrollTo(scroll.section_anchor_id)
            }
        }
    }

    /// Checks the location the browser landed on.
    ///
    /// Unknown paths redirect home; routable but non-canonical paths (such as a
    /// trailing slash after the project id) are replaced by their canonical
    /// form. Returns `None` when the location is already canonical.
    pub fn reconcile(&self, location_path: &str) -> Option<NavigationCommand> {
        match View::parse(location_path) {
            View::Unknown { path } => {
                warn!(path = %path, "unknown route; redirecting home");
                Some(NavigationCommand::Replace(HOME_PATH.to_string()))
            }
            view => {
                let canonical = view.path();
                (canonical != location_path).then(|| {
                    debug!(from = %location_path, to = %canonical, "normalizing route");
                    NavigationCommand::Replace(canonical)
                })
            }
        }
    }
}

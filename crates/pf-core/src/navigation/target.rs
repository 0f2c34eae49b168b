//! Navigation intents produced by user interaction.
//!
//! A target is consumed immediately: route targets replace the active view,
//! scroll targets smooth-scroll to an in-page anchor.

use std::collections::BTreeMap;

use super::route::{project_path, View, HOME_PATH};

/// Anchor of the projects section on the presentation page.
pub const PROJECTS_ANCHOR: &str = "progetti";
/// Anchor of the contact section on the presentation page.
pub const CONTACT_ANCHOR: &str = "contatti";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("route path must be absolute: {0:?}")]
    NotAbsolute(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTarget {
    pub path: String,
    pub params: BTreeMap<String, String>,
}

impl RouteTarget {
    pub fn new(path: impl Into<String>) -> Result<Self, RouteError> {
        let path = path.into();
        if !path.starts_with('/') {
            return Err(RouteError::NotAbsolute(path));
        }
        let params = View::parse(&path).params();
        Ok(Self { path, params })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollTarget {
    pub section_anchor_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationTarget {
    Route(RouteTarget),
    Scroll(ScrollTarget),
}

impl NavigationTarget {
    pub fn home() -> Self {
        NavigationTarget::Route(RouteTarget {
            path: HOME_PATH.to_string(),
            params: BTreeMap::new(),
        })
    }

    pub fn project(id: u32) -> Self {
        let path = project_path(id);
        let params = View::parse(&path).params();
        NavigationTarget::Route(RouteTarget { path, params })
    }

    pub fn section(anchor_id: impl Into<String>) -> Self {
        NavigationTarget::Scroll(ScrollTarget {
            section_anchor_id: anchor_id.into(),
        })
    }

    pub fn route(path: impl Into<String>) -> Result<Self, RouteError> {
        RouteTarget::new(path).map(NavigationTarget::Route)
    }
}

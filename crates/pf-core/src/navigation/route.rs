//! Path to view mapping.
//!
//! Two routes exist: `/` renders the presentation page and `/progetto/:id`
//! renders a project detail with `id` bound from the path segment. The id is
//! kept as the raw segment; converting it to a number is the catalog's job.

use std::collections::BTreeMap;

pub const HOME_PATH: &str = "/";
pub const PROJECT_PATH_PREFIX: &str = "/progetto/";

/// Top-level view selected by the current location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Presentation,
    ProjectDetail { id: String },
    Unknown { path: String },
}

impl View {
    /// Maps a location path to a view.
    ///
    /// Query strings and fragments are ignored. A single trailing slash after
    /// the project id is accepted; deeper paths are unknown.
    pub fn parse(path: &str) -> View {
        let pathname = path
            .split(|c| c == '?' || c == '#')
            .next()
            .unwrap_or_default();

        if pathname.is_empty() || pathname == HOME_PATH {
            return View::Presentation;
        }

        if let Some(rest) = pathname.strip_prefix(PROJECT_PATH_PREFIX) {
            let id = rest.strip_suffix('/').unwrap_or(rest);
            if !id.is_empty() && !id.contains('/') {
                return View::ProjectDetail { id: id.to_string() };
            }
        }

        View::Unknown {
            path: pathname.to_string(),
        }
    }

    /// Canonical path of the view.
    pub fn path(&self) -> String {
        match self {
            View::Presentation => HOME_PATH.to_string(),
            View::ProjectDetail { id } => format!("{PROJECT_PATH_PREFIX}{id}"),
            View::Unknown { path } => path.clone(),
        }
    }

    /// Path parameters bound by the route.
    pub fn params(&self) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();
        if let View::ProjectDetail { id } = self {
            params.insert("id".to_string(), id.clone());
        }
        params
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, View::Unknown { .. })
    }
}

/// Detail path for a catalog id.
pub fn project_path(id: u32) -> String {
    format!("{PROJECT_PATH_PREFIX}{id}")
}

//! Routes and navigation targets.

mod route;
mod target;

pub use route::{project_path, View, HOME_PATH, PROJECT_PATH_PREFIX};
pub use target::{
    NavigationTarget, RouteError, RouteTarget, ScrollTarget, CONTACT_ANCHOR, PROJECTS_ANCHOR,
};

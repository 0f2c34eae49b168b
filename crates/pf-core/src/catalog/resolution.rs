use super::ProjectRecord;

/// Outcome of resolving a route parameter against the catalog.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    Found(ProjectRecord),
    NotFound { requested: String },
}

impl Resolution {
    pub fn is_found(&self) -> bool {
        matches!(self, Resolution::Found(_))
    }

    pub fn into_project(self) -> Option<ProjectRecord> {
        match self {
            Resolution::Found(project) => Some(project),
            Resolution::NotFound { .. } => None,
        }
    }
}

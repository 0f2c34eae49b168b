//! Project catalog.
//!
//! The catalog is the single, ordered, read-only list of projects shown by the
//! project list and resolved by the project detail view. It is built once at
//! startup from configuration and shared by reference afterwards.

mod project;
mod resolution;

pub use project::{ProjectAction, ProjectActionKind, ProjectDetails, ProjectLinks, ProjectRecord};
pub use resolution::Resolution;

use std::collections::HashSet;

/// Errors raised while assembling the catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate project id {0}")]
    DuplicateId(u32),
}

/// Ordered, immutable collection of [`ProjectRecord`]s.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectCatalog {
    projects: Vec<ProjectRecord>,
}

impl ProjectCatalog {
    /// Builds a catalog, rejecting duplicate ids. Declaration order is kept.
    pub fn new(projects: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(projects.len());
        for project in &projects {
            if !seen.insert(project.id) {
                return Err(CatalogError::DuplicateId(project.id));
            }
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(count = projects.len(), "project catalog assembled");

        Ok(Self { projects })
    }

    pub fn iter(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn find(&self, id: u32) -> Option<&ProjectRecord> {
        self.projects.iter().find(|project| project.id == id)
    }

    /// Resolves a raw route parameter into a project.
    ///
    /// The parameter is parsed as a decimal integer and compared by equality
    /// with [`ProjectRecord::id`]. Anything that does not parse, or parses to an
    /// id that is not in the catalog, yields [`Resolution::NotFound`].
    pub fn resolve(&self, raw_id: &str) -> Resolution {
        let found = raw_id
            .trim()
            .parse::<u32>()
            .ok()
            .and_then(|id| self.find(id));

        match found {
            Some(project) => Resolution::Found(project.clone()),
            None => Resolution::NotFound {
                requested: raw_id.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, title: &str) -> ProjectRecord {
        ProjectRecord {
            id,
            title: title.to_string(),
            description: format!("{title} description"),
            technologies: vec!["Rust".to_string(), "Leptos".to_string()],
            links: ProjectLinks::default(),
            image: None,
            details: None,
        }
    }

    fn catalog() -> ProjectCatalog {
        ProjectCatalog::new(vec![record(1, "First"), record(2, "Second"), record(3, "Third")])
            .expect("catalog without duplicates")
    }

    #[test]
    fn new_rejects_duplicate_ids() {
        let err = ProjectCatalog::new(vec![record(1, "a"), record(1, "b")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateId(1));
    }

    #[test]
    fn iter_preserves_declaration_order() {
        let titles: Vec<_> = catalog().iter().map(|p| p.title.clone()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn resolve_matches_numeric_id() {
        match catalog().resolve("2") {
            Resolution::Found(project) => assert_eq!(project.title, "Second"),
            other => panic!("expected Found, got {other:?}"),
        }
    }

    #[test]
    fn resolve_unknown_id_is_not_found() {
        assert_eq!(
            catalog().resolve("999"),
            Resolution::NotFound {
                requested: "999".to_string()
            }
        );
    }

    #[test]
    fn resolve_non_numeric_id_is_not_found() {
        for raw in ["abc", "", "-1", "1.5", "0x1"] {
            assert!(
                !catalog().resolve(raw).is_found(),
                "{raw:?} should not resolve"
            );
        }
    }

    #[test]
    fn empty_catalog_resolves_nothing() {
        let empty = ProjectCatalog::new(Vec::new()).unwrap();
        assert!(empty.is_empty());
        assert!(!empty.resolve("1").is_found());
    }
}

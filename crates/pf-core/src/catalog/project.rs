use serde::{Deserialize, Serialize};

/// A single showcased project.
///
/// Records are immutable after startup. `technologies` keeps the order in
/// which the chips are rendered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: u32,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub links: ProjectLinks,
    /// Screenshot URL, rendered as-is.
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub details: Option<ProjectDetails>,
}

/// External links of a project. Either may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinks {
    #[serde(default)]
    pub repository: Option<String>,
    #[serde(default)]
    pub live_demo: Option<String>,
}

/// Summary block shown under "Dettagli progetto".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectDetails {
    pub stack: String,
    pub date: String,
    pub status: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectActionKind {
    Repository,
    LiveDemo,
}

impl ProjectActionKind {
    pub fn label(self) -> &'static str {
        match self {
            ProjectActionKind::Repository => "GitHub",
            ProjectActionKind::LiveDemo => "Live Demo",
        }
    }
}

/// A button the detail view renders for a present link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectAction {
    pub kind: ProjectActionKind,
    pub url: String,
}

impl ProjectLinks {
    /// Repository URL, treating blank strings as absent.
    pub fn repository(&self) -> Option<&str> {
        present(self.repository.as_deref())
    }

    /// Live demo URL, treating blank strings as absent.
    pub fn live_demo(&self) -> Option<&str> {
        present(self.live_demo.as_deref())
    }
}

impl ProjectRecord {
    /// Buttons to render, in display order. Absent links produce no entry.
    pub fn actions(&self) -> Vec<ProjectAction> {
        let candidates = [
            (ProjectActionKind::Repository, self.links.repository()),
            (ProjectActionKind::LiveDemo, self.links.live_demo()),
        ];

        candidates
            .into_iter()
            .filter_map(|(kind, url)| {
                url.map(|url| ProjectAction {
                    kind,
                    url: url.to_string(),
                })
            })
            .collect()
    }
}

fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_links(repository: Option<&str>, live_demo: Option<&str>) -> ProjectRecord {
        ProjectRecord {
            id: 7,
            title: "Demo".into(),
            description: "A demo".into(),
            technologies: vec![],
            links: ProjectLinks {
                repository: repository.map(Into::into),
                live_demo: live_demo.map(Into::into),
            },
            image: None,
            details: None,
        }
    }

    #[test]
    fn actions_include_both_links_when_present() {
        let project = with_links(Some("https://git.example/p"), Some("https://p.example"));
        let kinds: Vec<_> = project.actions().into_iter().map(|a| a.kind).collect();
        assert_eq!(
            kinds,
            vec![ProjectActionKind::Repository, ProjectActionKind::LiveDemo]
        );
    }

    #[test]
    fn actions_omit_missing_links() {
        let project = with_links(None, Some("https://p.example"));
        let actions = project.actions();
        assert_eq!(actions.len(), 1);
        assert_eq!(actions[0].kind, ProjectActionKind::LiveDemo);
        assert_eq!(actions[0].url, "https://p.example");

        assert!(with_links(None, None).actions().is_empty());
    }

    #[test]
    fn blank_link_counts_as_absent() {
        let project = with_links(Some("   "), Some(""));
        assert_eq!(project.links.repository(), None);
        assert!(project.actions().is_empty());
    }
}

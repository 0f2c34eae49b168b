//! # Configuration Loader
//!
//! Reads `site.toml` into [`SiteConfig`]. Missing sections and keys fall back
//! to the DTO defaults; nothing else is validated here.

use std::path::Path;

use anyhow::Context;
use pf_core::config::SiteConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid site configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parses configuration text.
pub fn parse_config(content: &str) -> Result<SiteConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// - File cannot be read
/// - Content is not valid TOML or does not match the expected shape
pub fn load_config(config_path: impl AsRef<Path>) -> anyhow::Result<SiteConfig> {
    let config_path = config_path.as_ref();
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    parse_config(&content).context("Failed to parse site configuration")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_config_reads_sections_and_projects() {
        let toml_content = r##"
            [email]
            service_id = "service_x"
            template_id = "template_y"
            public_key = "key_z"

            [timing]
            feedback_auto_hide_ms = 3000

            [profile]
            name = "Ada"

            [[projects]]
            id = 1
            title = "First"
            description = "First project"
            technologies = ["Rust", "Leptos"]

            [projects.links]
            repository = "https://git.example/first"

            [[projects]]
            id = 2
            title = "Second"
            description = "Second project"
        "##;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path()).unwrap();

        assert_eq!(config.email.service_id, "service_x");
        assert_eq!(config.email.api_base, "https://api.emailjs.com");
        assert_eq!(config.timing.feedback_auto_hide_ms, 3000);
        assert_eq!(config.timing.detail_load_delay_ms, 500);
        assert_eq!(config.profile.name, "Ada");
        assert_eq!(config.projects.len(), 2);
        assert_eq!(
            config.projects[0].links.repository(),
            Some("https://git.example/first")
        );
        assert!(config.projects[1].technologies.is_empty());
        assert_eq!(config.projects[1].links.repository(), None);
    }

    #[test]
    fn empty_document_yields_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config("/definitely/not/here/site.toml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn parse_config_rejects_wrong_types() {
        let err = parse_config("[timing]\ndetail_load_delay_ms = \"soon\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}

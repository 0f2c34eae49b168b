//! Embedded site configuration.
//!
//! The browser has no filesystem, so `config/site.toml` is compiled into the
//! binary and parsed once at startup.

use pf_core::config::SiteConfig;
use pf_infra::{parse_config, ConfigError};

const EMBEDDED_SITE_CONFIG: &str = include_str!("../../config/site.toml");

pub fn load_site_config() -> Result<SiteConfig, ConfigError> {
    parse_config(EMBEDDED_SITE_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_core::catalog::ProjectCatalog;

    #[test]
    fn embedded_config_parses() {
        let config = load_site_config().expect("embedded config must parse");
        assert_eq!(config.timing.detail_load_delay_ms, 500);
        assert_eq!(config.timing.feedback_auto_hide_ms, 6000);
        assert!((config.reveal.threshold - 0.3).abs() < f64::EPSILON);
        assert!(!config.email.service_id.is_empty());
    }

    #[test]
    fn embedded_catalog_is_valid() {
        let config = load_site_config().expect("embedded config must parse");
        let catalog = ProjectCatalog::new(config.projects).expect("ids must be unique");

        assert_eq!(catalog.len(), 3);
        let blog = catalog.find(3).expect("project 3 is listed");
        assert!(blog.actions().is_empty());
        assert!(blog.details.is_none());
        assert_eq!(catalog.find(1).map(|p| p.actions().len()), Some(2));
    }
}

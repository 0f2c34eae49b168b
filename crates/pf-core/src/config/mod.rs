//! # Site configuration DTOs
//!
//! Plain data mapped from `config/site.toml`. Every section is optional in the
//! file; missing sections and keys take the values from [`defaults`].
//! Parsing lives in `pf-infra`; this module only declares the shapes.

mod defaults;
mod theme;

pub use defaults::{
    DEFAULT_DETAIL_LOAD_DELAY_MS, DEFAULT_EMAILJS_API_BASE, DEFAULT_FEEDBACK_AUTO_HIDE_MS,
};
pub use theme::{ThemeConfig, ThemeMode};

use std::time::Duration;

use serde::Deserialize;

use crate::catalog::ProjectRecord;

/// Root configuration, provided once at the application root.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub email: EmailConfig,
    pub analytics: AnalyticsConfig,
    pub theme: ThemeConfig,
    pub timing: TimingConfig,
    pub reveal: RevealConfig,
    pub profile: ProfileConfig,
    pub logging: LoggingConfig,
    pub projects: Vec<ProjectRecord>,
}

/// EmailJS routing identifiers. Opaque strings, never validated.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EmailConfig {
    pub api_base: String,
    pub service_id: String,
    pub template_id: String,
    /// Public key, sent as `user_id`.
    pub public_key: String,
}

/// Analytics/app-config provider settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub enabled: bool,
    pub api_key: String,
    pub auth_domain: String,
    pub project_id: String,
    pub storage_bucket: String,
    pub messaging_sender_id: String,
    pub app_id: String,
    pub measurement_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    pub detail_load_delay_ms: u64,
    pub feedback_auto_hide_ms: u64,
}

impl TimingConfig {
    pub fn detail_load_delay(&self) -> Duration {
        Duration::from_millis(self.detail_load_delay_ms)
    }

    pub fn feedback_auto_hide(&self) -> Duration {
        Duration::from_millis(self.feedback_auto_hide_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
}

/// Hero section content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    pub name: String,
    pub bio: String,
    pub image: Option<String>,
    /// Target of the "Esplora Altri Progetti" button; hidden when absent.
    pub repositories_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directives overriding the build-profile default.
    pub filter: Option<String>,
}

use crate::config::AnalyticsConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnalyticsError {
    #[error("analytics configuration is missing {0}")]
    MissingField(&'static str),
    #[error("analytics provider failed to start: {0}")]
    Provider(String),
}

/// Starts the analytics/app-config provider. Called once at startup.
pub trait AnalyticsPort: Send + Sync {
    fn initialize(&self, config: &AnalyticsConfig) -> Result<(), AnalyticsError>;
}

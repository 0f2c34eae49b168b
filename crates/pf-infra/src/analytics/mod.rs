mod logging_analytics;

pub use logging_analytics::LoggingAnalytics;

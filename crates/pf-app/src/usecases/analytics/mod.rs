mod initialize_analytics;

pub use initialize_analytics::InitializeAnalytics;

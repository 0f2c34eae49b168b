use std::sync::Arc;

use leptos::prelude::*;
use pf_core::config::SiteConfig;
use tracing::{error, info, warn};

use super::config::load_site_config;
use super::tracing::{init_tracing_subscriber, report_startup_error};
use super::wiring::build_app;
use crate::app::PortfolioApp;

/// Entry point: load configuration, start logging, assemble the app and mount
/// the UI on `<body>`.
///
/// An invalid embedded configuration falls back to defaults so the page still
/// renders. Analytics failures are logged and never block mounting.
pub fn run() {
    let (config, config_error) = match load_site_config() {
        Ok(config) => (config, None),
        Err(err) => (SiteConfig::default(), Some(err)),
    };

    if let Err(err) = init_tracing_subscriber(&config.logging) {
        report_startup_error(&format!("Failed to initialize tracing: {err:#}"));
    }

    if let Some(err) = config_error {
        error!(error = %err, "embedded site configuration is invalid; using defaults");
    }

    let app = match build_app(config) {
        Ok(app) => Arc::new(app),
        Err(err) => {
            error!(error = %err, "failed to assemble portfolio app");
            report_startup_error(&format!("Failed to assemble portfolio app: {err}"));
            return;
        }
    };

    match app.initialize_analytics() {
        Ok(true) => info!("analytics started"),
        Ok(false) => {}
        Err(err) => warn!(error = %err, "analytics not started"),
    }

    info!("mounting portfolio");
    leptos::mount::mount_to_body(move || view! { <PortfolioApp site=app /> });
}

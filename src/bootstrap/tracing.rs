//! Tracing configuration for the portfolio site
//!
//! ## Behavior
//!
//! - **Development**: debug level for the site crates
//! - **Production**: info level
//! - **Override**: `[logging] filter` in `config/site.toml` replaces the defaults
//! - **Output**: browser console on wasm32 (one console call per event, routed
//!   by level), stdout on native targets
//!
//! There is no `RUST_LOG` in the browser, so the configuration file is the
//! only override.

use anyhow::Context;
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

use pf_core::config::LoggingConfig;

/// Check if running in development environment
fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Build the default filter directives for tracing
fn build_filter_directives(is_dev: bool) -> Vec<String> {
    let level = if is_dev { "debug" } else { "info" };
    vec![
        level.to_string(),
        format!("portfolio_lib={level}"),
        format!("pf_app={level}"),
        format!("pf_infra={level}"),
        format!("pf_core={level}"),
        "leptos_router=warn".to_string(), // Route matching is chatty at debug
        "reqwest=warn".to_string(),
        "hyper_util=warn".to_string(),
    ]
}

fn build_env_filter(config: &LoggingConfig) -> anyhow::Result<EnvFilter> {
    match config.filter.as_deref().map(str::trim) {
        Some(directives) if !directives.is_empty() => EnvFilter::try_new(directives)
            .with_context(|| format!("Invalid logging filter: {directives}")),
        _ => Ok(EnvFilter::new(
            build_filter_directives(is_development()).join(","),
        )),
    }
}

/// Initialize the tracing subscriber.
///
/// Call once from [`run`](crate::bootstrap::run), before the app is wired so
/// that adapter construction is already logged.
///
/// ## Errors
///
/// Returns `Err` if:
/// - The configured filter is not valid `EnvFilter` syntax
/// - A global subscriber is already registered
pub fn init_tracing_subscriber(config: &LoggingConfig) -> anyhow::Result<()> {
    let env_filter = build_env_filter(config)?;

    // Browser consoles stamp entries themselves.
    let layer = fmt::layer()
        .without_time()
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(false)
        .with_writer(make_writer());

    registry().with(env_filter).with(layer).try_init()?;

    Ok(())
}

/// Last-resort reporting for failures that happen before or during
/// subscriber setup.
pub fn report_startup_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(message));

    #[cfg(not(target_arch = "wasm32"))]
    eprintln!("{message}");
}

#[cfg(target_arch = "wasm32")]
fn make_writer() -> BoxMakeWriter {
    BoxMakeWriter::new(console::ConsoleMakeWriter)
}

#[cfg(not(target_arch = "wasm32"))]
fn make_writer() -> BoxMakeWriter {
    BoxMakeWriter::new(std::io::stdout)
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io;

    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    /// Buffers one formatted event and flushes it to the console on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl io::Write for ConsoleWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Drop for ConsoleWriter {
        fn drop(&mut self) {
            let text = String::from_utf8_lossy(&self.buffer);
            let line = text.trim_end();
            if line.is_empty() {
                return;
            }
            let line = JsValue::from_str(line);
            match self.level {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                level: Level::INFO,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                level: *meta.level(),
                buffer: Vec::new(),
            }
        }
    }
}

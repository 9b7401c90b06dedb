//! Console logging for the portal.
//!
//! The filter directives can be overridden at build time through
//! `UI_LOG_FILTER`, using the `EnvFilter` syntax.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

const DEFAULT_FILTER: &str = "error,ui=debug,payloads=debug";

fn filter() -> EnvFilter {
    let directives = option_env!("UI_LOG_FILTER").unwrap_or(DEFAULT_FILTER);
    EnvFilter::try_new(directives).unwrap_or_else(|e| {
        web_sys::console::warn_1(
            &format!("Ignoring UI_LOG_FILTER ({e}), using defaults").into(),
        );
        EnvFilter::new(DEFAULT_FILTER)
    })
}

/// Route `tracing` events to the browser console. Safe to call again, only
/// the first call installs a subscriber.
pub fn init_logging() {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_line_number(true)
        .with_level(false)
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level());

    let installed = tracing_subscriber::registry()
        .with(filter())
        .with(console_layer)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!("Console logging ready");
    }
}

//! Environment-aware structured logging for the pipeline host.

use std::sync::OnceLock;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Initialize structured logging with an `RUST_LOG`-style environment filter.
///
/// Safe to call more than once; if a global subscriber is already installed
/// (for example by a host embedding this crate) the call is a no-op.
pub fn init_logging() {
    LOGGER_INITIALIZED.get_or_init(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_log_level()));

        let subscriber = tracing_subscriber::registry().with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_filter(filter),
        );

        if subscriber.try_init().is_err() {
            tracing::debug!("global tracing subscriber already initialized");
        }
    });
}

fn default_log_level() -> &'static str {
    match std::env::var("OTR_ENV").as_deref() {
        Ok("production") => "info",
        Ok("test") => "warn",
        _ => "debug",
    }
}

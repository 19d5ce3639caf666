//! Tracing setup shared by the binaries
//!
//! The library only emits events; installing a subscriber is left to the
//! entry points. Callers resolve the filter string themselves (see
//! `config::log_filter_from_env`), so the environment is read once.

use crate::config::DEFAULT_LOG_FILTER;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Parse `filter`, falling back to `DEFAULT_LOG_FILTER` if it is malformed
pub fn build_filter(filter: &str) -> EnvFilter {
    EnvFilter::try_new(filter).unwrap_or_else(|err| {
        eprintln!("ignoring invalid log filter '{}': {}", filter, err);
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

/// Install a fmt subscriber writing to stderr
pub fn init_tracing(filter: &str) {
    // A second call (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(build_filter(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

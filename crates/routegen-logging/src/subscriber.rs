//! Global subscriber installation

use crate::reload::{ReloadHandle, level_filter};
use routegen_core::LogLevel;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::reload;

/// Level used when neither a level nor `RUST_LOG` is given
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Warn;

/// Install the global subscriber, writing to stderr.
///
/// An explicit `level` wins; otherwise `RUST_LOG` is honored, falling back
/// to [`DEFAULT_LEVEL`]. The filter stays reloadable through
/// [`ReloadHandle::global`]. Returns `false` if a subscriber was already set.
pub fn init_logging(level: Option<LogLevel>) -> bool {
    use tracing_subscriber::prelude::*;

    let (filter, handle) = reload::Layer::new(initial_filter(level));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return false;
    }

    ReloadHandle::global().set_handle(handle);
    true
}

fn initial_filter(level: Option<LogLevel>) -> EnvFilter {
    match level {
        Some(level) => level_filter(level),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| level_filter(DEFAULT_LEVEL)),
    }
}

#[cfg(test)]
#[path = "subscriber/subscriber_tests.rs"]
mod subscriber_tests;

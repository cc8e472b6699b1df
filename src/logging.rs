//! Logging utilities wrapping `tracing` initialisation

use crate::config::LoggingOptions;
use crate::error::{Error, Result};
use std::io;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

/// Initialise the global tracing subscriber according to the provided logging options.
///
/// Diagnostics go to stderr; stdout carries operator status lines only.
/// Subsequent calls are ignored to avoid reinitialisation panics.
pub fn init(options: &LoggingOptions) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let env_filter = EnvFilter::try_new(options.level.as_str())
        .map_err(|e| Error::Config(format!("Invalid log level '{}': {e}", options.level)))?;

    let stderr_layer = fmt::layer()
        .with_timer(UtcTime::rfc_3339())
        .with_writer(io::stderr)
        .with_ansi(options.color)
        .with_target(true)
        .with_level(true);

    Registry::default()
        .with(env_filter)
        .with(stderr_layer)
        .try_init()
        .map_err(|e| Error::Config(format!("Failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_directive() {
        let options = LoggingOptions {
            level: "urlqr=notalevel".to_string(),
            color: false,
        };
        // Another test may have installed the global subscriber first.
        match init(&options) {
            Ok(()) => assert!(tracing::dispatcher::has_been_set()),
            Err(err) => assert!(matches!(err, Error::Config(_))),
        }
    }

    #[test]
    fn second_init_is_noop() {
        let options = LoggingOptions {
            level: "warn".to_string(),
            color: false,
        };
        let _ = init(&options);
        assert!(init(&options).is_ok());
    }
}

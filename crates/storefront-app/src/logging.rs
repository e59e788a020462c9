//! Logging setup for the storefront binary.
//!
//! Library crates log through the `log` facade; the subscriber installed
//! here also receives those records. Output goes to stderr so the shop
//! screens on stdout stay readable.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

use crate::{Error, Result};

const VALID_LEVELS: [&str; 5] = ["error", "warn", "info", "debug", "trace"];

/// Filter directive for a configured `level` raised by `-v` flags.
///
/// Unknown levels fall back to `info`. HTTP internals stay at `warn`.
pub fn filter_directive(level: &str, verbosity: u8) -> String {
    let configured = level.trim().to_ascii_lowercase();
    let base = match verbosity {
        0 if VALID_LEVELS.contains(&configured.as_str()) => configured.as_str(),
        0 => "info",
        1 => "debug",
        _ => "trace",
    };
    format!("{base},hyper=warn,hyper_util=warn,reqwest=warn")
}

/// Install the global subscriber.
///
/// `RUST_LOG` takes precedence over the configured level.
pub fn init(level: &str, verbosity: u8) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, verbosity)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .finish()
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_uses_configured_level() {
        assert!(filter_directive("warn", 0).starts_with("warn,"));
        assert!(filter_directive(" DEBUG ", 0).starts_with("debug,"));
    }

    #[test]
    fn test_filter_unknown_level_falls_back() {
        assert!(filter_directive("chatty", 0).starts_with("info,"));
    }

    #[test]
    fn test_verbosity_overrides_level() {
        assert!(filter_directive("error", 1).starts_with("debug,"));
        assert!(filter_directive("error", 3).starts_with("trace,"));
    }

    #[test]
    fn test_second_init_reports_logging_error() {
        // The first call may or may not win the global slot in a shared test
        // binary; the second never does.
        let _ = init("info", 0);
        let err = init("info", 0).unwrap_err();
        assert!(matches!(err, Error::Logging(_)));
    }

    #[test]
    fn test_filter_quiets_http_internals() {
        assert!(filter_directive("info", 0).contains("hyper=warn"));
    }
}

//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::defaults::LOG_FILTER_ENV;
use crate::config::ObservabilityConfig;

static INIT: Once = Once::new();

/// Initialize structured logging.
///
/// Reads the `ELIG_LOG` environment variable for per-target levels, e.g.
/// `ELIG_LOG=elig_doid=debug,elig_composite=trace`. Falls back to
/// `config.log_level` when unset or invalid.
///
/// Idempotent. Leaves an already-installed global subscriber in place.
pub fn init_tracing(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let installed = if config.json {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .json()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_thread_ids(true)
                        .with_file(true)
                        .with_line_number(true),
                )
                .with(filter)
                .try_init()
        };

        if let Err(e) = installed {
            tracing::debug!(error = %e, "global subscriber already installed");
        }
    });
}

/// Initialize tracing with a custom fallback filter (for tests or embedding). `ELIG_LOG` still wins.
pub fn init_tracing_with_filter(filter: &str) {
    init_tracing(&ObservabilityConfig {
        log_level: filter.to_string(),
        json: false,
    });
}

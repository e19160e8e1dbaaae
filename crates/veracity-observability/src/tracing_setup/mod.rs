//! Tracing setup: structured logging with event helpers.

pub mod events;

use tracing_subscriber::EnvFilter;
use veracity_core::config::ObservabilityConfig;

/// Environment variable that overrides the configured filter.
pub const LOG_ENV_VAR: &str = "VERACITY_LOG";

/// Initialize the global subscriber from config.
///
/// `VERACITY_LOG` wins over `config.log_level` when set. Returns false if a
/// global subscriber was already installed.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    if config.json_logs {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    }
}

/// Initialize tracing with a custom filter string (for testing or embedding).
pub fn init_tracing_with_filter(filter: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(true)
        .json()
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_init_reports_existing_subscriber() {
        init_tracing_with_filter("warn");
        assert!(!init_tracing_with_filter("debug"));
    }
}

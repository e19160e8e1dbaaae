//! Layered configuration. Every section is `#[serde(default)]`, so an empty
//! TOML document yields a fully populated config.

pub mod defaults;
mod observability_config;
mod probe_config;
mod scoring_config;
mod server_config;
mod storage_config;

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub use observability_config::ObservabilityConfig;
pub use probe_config::ProbeConfig;
pub use scoring_config::ScoringConfig;
pub use server_config::ServerConfig;
pub use storage_config::{PersistenceFailurePolicy, StorageConfig};

use crate::errors::{ConfigError, VeracityResult};

/// Top-level Veracity configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VeracityConfig {
    pub scoring: ScoringConfig,
    pub probe: ProbeConfig,
    pub storage: StorageConfig,
    pub server: ServerConfig,
    pub observability: ObservabilityConfig,
}

impl VeracityConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml(toml_str: &str) -> VeracityResult<Self> {
        Self::parse(toml_str, "<inline>")
    }

    /// Read, parse, and validate a TOML file.
    pub fn load(path: &Path) -> VeracityResult<Self> {
        let display = path.display().to_string();
        let content = std::fs::read_to_string(path)
            .map_err(|_| ConfigError::FileNotFound { path: display.clone() })?;
        Self::parse(&content, &display)
    }

    fn parse(toml_str: &str, origin: &str) -> VeracityResult<Self> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the rest of the system cannot work with.
    pub fn validate(&self) -> VeracityResult<()> {
        if self.probe.max_timeout_ms == 0 {
            return Err(invalid("probe.max_timeout_ms", "must be greater than zero"));
        }
        if self.storage.input_truncate_chars == 0 {
            return Err(invalid(
                "storage.input_truncate_chars",
                "must be greater than zero",
            ));
        }
        if self.server.bind_addr.parse::<SocketAddr>().is_err() {
            return Err(invalid(
                "server.bind_addr",
                &format!("'{}' is not a socket address", self.server.bind_addr),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &str, message: &str) -> crate::errors::VeracityError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        message: message.to_string(),
    }
    .into()
}

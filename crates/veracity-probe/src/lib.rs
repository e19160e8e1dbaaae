//! # veracity-probe
//!
//! Liveness probers: the only component in the scorer that performs real I/O.
//!
//! - [`HttpLivenessProber`]: HEAD requests over a blocking `reqwest` client
//! - [`StaticProber`]: preconfigured outcomes, for tests and offline runs
//! - [`DisabledProber`]: every probe fails, so probe rules score it as a negative signal

pub mod disabled;
pub mod http;
pub mod fixed;

pub use disabled::DisabledProber;
pub use fixed::StaticProber;
pub use http::HttpLivenessProber;

use std::sync::Arc;

use veracity_core::config::ProbeConfig;
use veracity_core::errors::VeracityResult;
use veracity_core::traits::ILivenessProber;

/// Build the prober described by `config`.
pub fn from_config(config: &ProbeConfig) -> VeracityResult<Arc<dyn ILivenessProber>> {
    if config.enabled {
        Ok(Arc::new(HttpLivenessProber::new(config)?))
    } else {
        Ok(Arc::new(DisabledProber))
    }
}

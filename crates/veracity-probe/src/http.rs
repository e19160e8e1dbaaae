//! HEAD-based liveness prober over a blocking `reqwest` client.
//!
//! Redirect policy is a client-level setting in reqwest, so two clients are
//! built up front: one that follows redirects and one that never does.
//! Every request carries a timeout no larger than `max_timeout`.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use reqwest::redirect;
use tracing::debug;
use url::Url;

use veracity_core::config::ProbeConfig;
use veracity_core::errors::{ProbeError, VeracityResult};
use veracity_core::models::{ProbeOutcome, ProbePolicy, RedirectPolicy};
use veracity_core::traits::ILivenessProber;

/// Real network prober. No retries: one request, one classified outcome.
#[derive(Debug, Clone)]
pub struct HttpLivenessProber {
    follow: Client,
    manual: Client,
    max_timeout: Duration,
}

impl HttpLivenessProber {
    pub fn new(config: &ProbeConfig) -> VeracityResult<Self> {
        let follow = build_client(config, redirect::Policy::limited(config.max_redirects))?;
        let manual = build_client(config, redirect::Policy::none())?;
        Ok(Self {
            follow,
            manual,
            max_timeout: config.max_timeout(),
        })
    }

    /// Policy timeout capped by the configured upper bound.
    pub fn effective_timeout(&self, policy: &ProbePolicy) -> Duration {
        policy
            .timeout
            .map_or(self.max_timeout, |t| t.min(self.max_timeout))
    }

    fn client_for(&self, policy: &ProbePolicy) -> &Client {
        match policy.redirects {
            RedirectPolicy::Follow => &self.follow,
            RedirectPolicy::Manual => &self.manual,
        }
    }
}

fn build_client(config: &ProbeConfig, redirects: redirect::Policy) -> VeracityResult<Client> {
    let mut builder = Client::builder()
        .user_agent(config.user_agent.clone())
        .redirect(redirects)
        .timeout(config.max_timeout());
    if !config.use_system_proxy {
        builder = builder.no_proxy();
    }
    builder
        .build()
        .map_err(|e| {
            ProbeError::ClientBuild {
                reason: e.to_string(),
            }
            .into()
        })
}

impl ILivenessProber for HttpLivenessProber {
    fn probe(&self, url: &str, policy: &ProbePolicy) -> ProbeOutcome {
        let parsed = match Url::parse(url) {
            Ok(parsed) => parsed,
            Err(e) => return ProbeOutcome::failed(format!("invalid URL: {e}")),
        };
        if !matches!(parsed.scheme(), "http" | "https") {
            return ProbeOutcome::failed(format!("unsupported scheme: {}", parsed.scheme()));
        }

        let timeout = self.effective_timeout(policy);
        let response = self
            .client_for(policy)
            .head(parsed)
            .timeout(timeout)
            .send();

        match response {
            Ok(resp) => {
                let status = resp.status().as_u16();
                let content_type = resp
                    .headers()
                    .get(CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                debug!(url = %url, status, content_type = ?content_type, "probe response");
                ProbeOutcome::from_response(policy, status, content_type)
            }
            Err(e) if e.is_timeout() => {
                ProbeOutcome::failed(format!("timed out after {}ms", timeout.as_millis()))
            }
            Err(e) => ProbeOutcome::failed(e.to_string()),
        }
    }
}

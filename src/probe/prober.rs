use async_trait::async_trait;
use futures::future::join_all;
use log::debug;
use std::time::Duration;

use crate::config::Config;
use crate::core::constants::http_status;
use crate::core::{HostProbeError, ProbeResult, Result, Scheme};

/// Issues a single GET and reports the status code it answered with.
///
/// Any failure before the full response is read (DNS, refused connection,
/// TLS handshake, timeout, truncated body) is an `Err`.
#[async_trait]
pub trait FetchStatus: Send + Sync {
    async fn fetch_status(&self, url: &str, timeout: Duration) -> Result<u16>;
}

/// Probes one host over every scheme in [`Scheme::ALL`].
#[async_trait]
pub trait ProbeHost: Send + Sync {
    async fn probe(&self, host: &str, timeout: Duration) -> ProbeResult;
}

/// Whether a status code counts as a live response (1xx, 2xx and 3xx do).
pub fn is_live_status(status_code: u16) -> bool {
    status_code < http_status::DEAD_THRESHOLD
}

/// [`FetchStatus`] backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
}

fn transport_error(err: reqwest::Error) -> HostProbeError {
    let description = std::error::Error::source(&err)
        .map(|e| e.to_string())
        .unwrap_or_else(|| err.to_string());
    HostProbeError::Transport(description)
}

impl ReqwestFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the client from configuration.
    ///
    /// Redirects follow reqwest's default policy. Idle connections are not
    /// kept around, every probe opens its own connection.
    pub fn from_config(config: &Config) -> Result<Self> {
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .user_agent(user_agent)
            .pool_max_idle_per_host(0);

        if config.insecure.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        Ok(Self::new(client_builder.build()?))
    }
}

#[async_trait]
impl FetchStatus for ReqwestFetcher {
    async fn fetch_status(&self, url: &str, timeout: Duration) -> Result<u16> {
        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .send()
            .await
            .map_err(transport_error)?;
        let status_code = response.status().as_u16();

        // The request timeout also covers the body
        response.bytes().await.map_err(transport_error)?;

        Ok(status_code)
    }
}

/// Checks a host against every scheme in [`Scheme::ALL`].
#[derive(Debug, Clone)]
pub struct Prober<F> {
    fetcher: F,
}

impl<F: FetchStatus> Prober<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    async fn check(&self, url: String, timeout: Duration) -> Option<String> {
        match self.fetcher.fetch_status(&url, timeout).await {
            Ok(status_code) if is_live_status(status_code) => {
                debug!("✓ {url} -> {status_code}");
                Some(url)
            }
            _ => None,
        }
    }
}

impl Prober<ReqwestFetcher> {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(ReqwestFetcher::from_config(config)?))
    }
}

#[async_trait]
impl<F: FetchStatus> ProbeHost for Prober<F> {
    async fn probe(&self, host: &str, timeout: Duration) -> ProbeResult {
        // All schemes go out together; one failing never affects another.
        let checks = Scheme::ALL
            .iter()
            .map(|scheme| self.check(scheme.url_for(host), timeout));
        let live = join_all(checks).await;

        ProbeResult::with_urls(host, live.into_iter().flatten())
    }
}

//! HTTP client seam for probe execution
//!
//! Probes only ever issue GET requests and need the full response body for
//! JSON validation, so the trait is deliberately narrow. The production
//! implementation uses isahc; tests inject a mock behind the same trait.

use crate::core::probe::types::{ProbeError, ProbeResponse};
use std::time::{Duration, Instant};

use isahc::config::{Configurable, RedirectPolicy};
use isahc::{AsyncReadResponseExt, HttpClient, Request};

/// GET-only HTTP client abstraction for dependency injection and testing.
#[async_trait::async_trait]
pub trait ProbeHttpClient: Send + Sync {
    /// Execute a GET request against `url` with a per-request timeout.
    ///
    /// Redirects are not followed; a 3xx comes back as-is and the caller
    /// decides what to make of it.
    async fn get(&self, url: String, timeout: Duration) -> Result<ProbeResponse, ProbeError>;
}

/// Production client backed by isahc.
pub struct IsahcProbeClient {
    client: HttpClient,
}

impl IsahcProbeClient {
    pub fn new() -> Result<Self, ProbeError> {
        let client = HttpClient::builder()
            .redirect_policy(RedirectPolicy::None)
            .build()
            .map_err(|e| ProbeError::Transport(format!("failed to create HTTP client: {e}")))?;
        Ok(Self { client })
    }
}

#[async_trait::async_trait]
impl ProbeHttpClient for IsahcProbeClient {
    async fn get(&self, url: String, timeout: Duration) -> Result<ProbeResponse, ProbeError> {
        let start = Instant::now();

        let request = Request::get(&url)
            .timeout(timeout)
            .header("User-Agent", concat!("refoodify-probe/", env!("CARGO_PKG_VERSION")))
            .header("Accept", "application/json")
            .body(Vec::new())
            .map_err(|e| ProbeError::Transport(format!("request construction failed: {e}")))?;

        let mut response = self
            .client
            .send_async(request)
            .await
            .map_err(|e| ProbeError::Transport(e.to_string()))?;

        let status_code = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|e| ProbeError::Transport(format!("failed to read response body: {e}")))?
            .to_vec();

        Ok(ProbeResponse {
            status_code,
            body,
            duration: start.elapsed(),
        })
    }
}

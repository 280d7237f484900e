// Core types shared across the probe suite
use std::time::Duration;

/// Outcome of one probe invocation, kept for the summary table.
///
/// Created once per probe run and never mutated afterwards; the summary is
/// printed in registration order from these records.
#[derive(Debug, Clone, PartialEq)]
pub struct ProbeResult {
    pub name: String,
    pub passed: bool,
}

/// Aggregated outcome of a full suite run.
#[derive(Debug, Clone)]
pub struct RunSummary {
    /// One entry per registered probe, in registration order.
    pub results: Vec<ProbeResult>,
}

impl RunSummary {
    pub fn passed_count(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn total_count(&self) -> usize {
        self.results.len()
    }

    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|r| r.passed)
    }

    /// Process exit status: 0 when every probe passed, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }
}

/// Errors a probe can surface to the runner.
///
/// Every variant is contained at the probe boundary: the runner converts it
/// to a failed [`ProbeResult`] and moves on to the next probe.
#[derive(Debug, thiserror::Error)]
pub enum ProbeError {
    /// Missing or placeholder credential detected before any network call.
    #[error("configuration error: {0}")]
    Config(String),
    /// Network-level failure: DNS, connect, TLS, or request timeout.
    #[error("transport error: {0}")]
    Transport(String),
    /// Endpoint answered with a non-200 status.
    #[error("endpoint returned status {status}")]
    Protocol {
        status: u16,
        /// Response body, truncated for log output.
        body: String,
    },
    /// 200 response whose payload is missing the fields the probe expected.
    /// Treated as a soft failure: logged as a warning, not an error.
    #[error("unexpected response shape: {0}")]
    DataShape(String),
}

impl ProbeError {
    /// Soft failures are reported with a warning glyph instead of an error one.
    pub fn is_soft(&self) -> bool {
        matches!(self, ProbeError::DataShape(_))
    }
}

/// Response surfaced by the HTTP client seam.
#[derive(Debug, Clone)]
pub struct ProbeResponse {
    pub status_code: u16,
    pub body: Vec<u8>,
    /// Wall-clock duration of the request, for the rate-limit report.
    pub duration: Duration,
}

impl ProbeResponse {
    /// Body truncated to `limit` characters for log lines, lossy on
    /// non-UTF-8 payloads.
    pub fn body_snippet(&self, limit: usize) -> String {
        let text = String::from_utf8_lossy(&self.body);
        let mut snippet: String = text.chars().take(limit).collect();
        if text.chars().count() > limit {
            snippet.push_str("...");
        }
        snippet
    }
}

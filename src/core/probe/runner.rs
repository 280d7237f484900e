//! Sequential probe runner
//!
//! The runner owns the ordered probe registry and drives the whole suite:
//! banner, one section per probe, then the summary table. A probe's failure
//! is contained at its own boundary; the runner always finishes and always
//! prints the summary, even when every probe fails.

use std::sync::Arc;
use std::time::Duration;

use crate::config::Credentials;
use crate::core::probe::client::ProbeHttpClient;
use crate::core::probe::report::Reporter;
use crate::core::probe::types::{ProbeError, ProbeResult, RunSummary};

/// Read-only context handed to each probe.
pub struct ProbeContext {
    pub credentials: Credentials,
    pub client: Arc<dyn ProbeHttpClient>,
    pub reporter: Reporter,
    /// Per-request timeout, shared by every probe.
    pub timeout: Duration,
}

/// One self-contained check against an external API, yielding pass/fail.
#[async_trait::async_trait]
pub trait Probe: Send + Sync {
    /// Short name used in the registry and the summary table.
    fn name(&self) -> &str;

    /// Section header title, defaults to the registry name.
    fn title(&self) -> &str {
        self.name()
    }

    /// Run the check. Any `Err` is converted by the runner into a failed
    /// result; nothing propagates past the runner boundary.
    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError>;
}

/// Drives registered probes in registration order and aggregates outcomes.
pub struct ProbeRunner {
    probes: Vec<Box<dyn Probe>>,
}

impl ProbeRunner {
    pub fn new(probes: Vec<Box<dyn Probe>>) -> Self {
        Self { probes }
    }

    pub fn probe_names(&self) -> Vec<&str> {
        self.probes.iter().map(|p| p.name()).collect()
    }

    /// Keep only probes whose name contains `needle` (case-insensitive).
    pub fn retain_matching(&mut self, needle: &str) {
        let needle = needle.to_lowercase();
        self.probes.retain(|p| p.name().to_lowercase().contains(&needle));
    }

    pub fn is_empty(&self) -> bool {
        self.probes.is_empty()
    }

    /// Execute the suite: header, every probe in order, summary table.
    pub async fn run(&self, ctx: &ProbeContext) -> RunSummary {
        let reporter = ctx.reporter;
        reporter.banner("Refoodify API Integration Test Suite");

        let mut results = Vec::with_capacity(self.probes.len());
        for (index, probe) in self.probes.iter().enumerate() {
            reporter.section(&format!("Test {}: {}", index + 1, probe.title()));

            let passed = match probe.run(ctx).await {
                Ok(()) => true,
                Err(err) => {
                    self.report_failure(&reporter, &err);
                    false
                }
            };

            results.push(ProbeResult {
                name: probe.name().to_string(),
                passed,
            });
        }

        let summary = RunSummary { results };
        self.print_summary(&reporter, &summary);
        summary
    }

    fn report_failure(&self, reporter: &Reporter, err: &ProbeError) {
        if err.is_soft() {
            reporter.warning(&err.to_string());
            return;
        }
        reporter.error(&err.to_string());
        if let ProbeError::Protocol { body, .. } = err {
            if !body.is_empty() {
                reporter.info(&format!("Response: {body}"));
            }
        }
    }

    fn print_summary(&self, reporter: &Reporter, summary: &RunSummary) {
        reporter.section("Test Summary");
        for result in &summary.results {
            reporter.summary_row(&result.name, result.passed);
        }
        reporter.summary_total(summary.passed_count(), summary.total_count());
    }
}

pub mod client;
pub mod endpoint;
pub mod report;
pub mod runner;
pub mod types;

// Re-export commonly used items
pub use client::{IsahcProbeClient, ProbeHttpClient};
pub use endpoint::EndpointCheck;
pub use report::Reporter;
pub use runner::{Probe, ProbeContext, ProbeRunner};
pub use types::{ProbeError, ProbeResponse, ProbeResult, RunSummary};

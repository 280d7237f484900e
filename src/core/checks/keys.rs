//! API key validation check
//!
//! The only probe with no network call: both keys must be non-empty and
//! different from the placeholder sentinel. Runs first so an unconfigured
//! environment is called out before any endpoint noise.

use crate::core::probe::runner::{Probe, ProbeContext};
use crate::core::probe::types::ProbeError;

pub struct KeyValidationProbe;

#[async_trait::async_trait]
impl Probe for KeyValidationProbe {
    fn name(&self) -> &str {
        "API Key Validation"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let reporter = &ctx.reporter;
        let creds = &ctx.credentials;

        let spoonacular_ok = creds.spoonacular.is_configured();
        if spoonacular_ok {
            reporter.success(&format!(
                "Spoonacular API key is set (from {})",
                creds.spoonacular.source
            ));
        } else {
            reporter.error("Spoonacular API key is missing or invalid");
        }

        let google_ok = creds.google_maps.is_configured();
        if google_ok {
            reporter.success(&format!(
                "Google Maps API key is set (from {})",
                creds.google_maps.source
            ));
        } else {
            reporter.error("Google Maps API key is missing or invalid");
        }

        if spoonacular_ok && google_ok {
            Ok(())
        } else {
            Err(ProbeError::Config(
                "one or more API keys are missing or placeholders".into(),
            ))
        }
    }
}

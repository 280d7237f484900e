//! Rate-limiting and performance check
//!
//! Issues a small burst of back-to-back requests against the cheapest
//! Spoonacular endpoint to observe external throttling. Sequential on
//! purpose: the point is to see whether the provider pushes back, not to
//! generate load. Fails fast on the first non-200.

use std::time::Instant;

use url::Url;

use crate::config::{Credentials, RATE_LIMIT_REQUESTS};
use crate::core::checks::spoonacular::endpoint_url;
use crate::core::probe::endpoint::BODY_SNIPPET_LEN;
use crate::core::probe::runner::{Probe, ProbeContext};
use crate::core::probe::types::ProbeError;

pub struct RateLimitProbe;

fn burst_url(creds: &Credentials) -> Result<Url, ProbeError> {
    let mut url = endpoint_url("/recipes/findByIngredients")?;
    url.query_pairs_mut()
        .append_pair("ingredients", "apple")
        .append_pair("number", "1")
        .append_pair("apiKey", &creds.spoonacular.value);
    Ok(url)
}

#[async_trait::async_trait]
impl Probe for RateLimitProbe {
    fn name(&self) -> &str {
        "Rate Limiting Check"
    }

    fn title(&self) -> &str {
        "Rate Limiting & Performance Check"
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        let reporter = &ctx.reporter;
        reporter.info(&format!(
            "Making {RATE_LIMIT_REQUESTS} requests to test rate limiting..."
        ));

        let url = burst_url(&ctx.credentials)?;
        let start = Instant::now();

        for i in 1..=RATE_LIMIT_REQUESTS {
            let response = ctx.client.get(url.to_string(), ctx.timeout).await?;

            if response.status_code != 200 {
                reporter.error(&format!(
                    "Request {i} failed with status {}",
                    response.status_code
                ));
                return Err(ProbeError::Protocol {
                    status: response.status_code,
                    body: response.body_snippet(BODY_SNIPPET_LEN),
                });
            }

            reporter.detail(&format!(
                "Request {i}: OK ({:.2}s)",
                response.duration.as_secs_f64()
            ));
        }

        reporter.success(&format!(
            "All requests successful in {:.2}s",
            start.elapsed().as_secs_f64()
        ));
        Ok(())
    }
}

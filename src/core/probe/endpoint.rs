//! Parametrized single-endpoint probe
//!
//! The five plain HTTP checks in the suite all follow the same shape: build
//! a URL from the credentials, GET it with the shared timeout, require a 200,
//! parse the JSON body, inspect a handful of fields. [`EndpointCheck`] turns
//! that shape into data so each check is a descriptor instead of a
//! copy-pasted function.

use serde_json::Value;
use url::Url;

use crate::config::Credentials;
use crate::core::probe::report::Reporter;
use crate::core::probe::runner::{Probe, ProbeContext};
use crate::core::probe::types::ProbeError;

/// Longest response-body prefix carried into log output.
pub const BODY_SNIPPET_LEN: usize = 200;

/// Descriptor for one request/validate probe.
pub struct EndpointCheck {
    pub name: &'static str,
    pub title: &'static str,
    /// Announce what is being tested before the request goes out.
    pub announce: fn(&Reporter),
    /// Build the request URL. Keys are interpolated here and never logged.
    pub build_url: fn(&Credentials) -> Result<Url, ProbeError>,
    /// Inspect the parsed 200 body; print display fields, or return a
    /// `DataShape` error when expected fields are missing.
    pub validate: fn(&Value, &Reporter) -> Result<(), ProbeError>,
}

#[async_trait::async_trait]
impl Probe for EndpointCheck {
    fn name(&self) -> &str {
        self.name
    }

    fn title(&self) -> &str {
        self.title
    }

    async fn run(&self, ctx: &ProbeContext) -> Result<(), ProbeError> {
        (self.announce)(&ctx.reporter);

        let url = (self.build_url)(&ctx.credentials)?;
        let response = ctx.client.get(url.to_string(), ctx.timeout).await?;

        if response.status_code != 200 {
            return Err(ProbeError::Protocol {
                status: response.status_code,
                body: response.body_snippet(BODY_SNIPPET_LEN),
            });
        }

        let payload: Value = serde_json::from_slice(&response.body).map_err(|e| {
            ProbeError::DataShape(format!("200 response was not valid JSON: {e}"))
        })?;

        (self.validate)(&payload, &ctx.reporter)
    }
}

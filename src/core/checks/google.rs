//! Google Maps checks
//!
//! Two endpoint descriptors against `maps.googleapis.com`: geocoding a fixed
//! address and a nearby-places search around fixed coordinates. The key is
//! suspected to be a third-party-gateway key rather than a native Google
//! one, so the geocoding validator treats an empty result list as a soft
//! failure pointing at key permissions rather than as a hard error.

use serde_json::Value;
use url::Url;

use crate::config::Credentials;
use crate::core::checks::spoonacular::{num_field, str_field};
use crate::core::probe::endpoint::EndpointCheck;
use crate::core::probe::report::Reporter;
use crate::core::probe::types::ProbeError;

const BASE: &str = "https://maps.googleapis.com";

/// Address used for the geocoding check.
pub const GEOCODE_ADDRESS: &str = "Kigali, Rwanda";
/// Kigali city-center coordinates for the nearby search.
pub const NEARBY_LOCATION: &str = "-1.9441,30.0619";
/// Nearby search radius in meters.
pub const NEARBY_RADIUS_M: u32 = 5000;
/// Keyword for the nearby search.
pub const NEARBY_KEYWORD: &str = "food bank";

fn endpoint_url(path: &str) -> Result<Url, ProbeError> {
    Url::parse(BASE)
        .and_then(|base| base.join(path))
        .map_err(|e| ProbeError::Config(format!("invalid endpoint URL {path}: {e}")))
}

pub fn geocoding_check() -> EndpointCheck {
    EndpointCheck {
        name: "Google Maps - Geocoding",
        title: "Google Maps - Geocoding",
        announce: |reporter| {
            reporter.info(&format!("Geocoding location: {GEOCODE_ADDRESS}"));
        },
        build_url: geocoding_url,
        validate: validate_geocoding,
    }
}

pub fn geocoding_url(creds: &Credentials) -> Result<Url, ProbeError> {
    let mut url = endpoint_url("/maps/api/geocode/json")?;
    url.query_pairs_mut()
        .append_pair("address", GEOCODE_ADDRESS)
        .append_pair("key", &creds.google_maps.value);
    Ok(url)
}

pub fn validate_geocoding(payload: &Value, reporter: &Reporter) -> Result<(), ProbeError> {
    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ProbeError::DataShape("geocode response has no results array".into()))?;

    // A 200 with zero results is how this API reports a key without
    // geocoding permissions.
    let first = results.first().ok_or_else(|| {
        ProbeError::DataShape(
            "no results found - API key may not have geocoding permissions".into(),
        )
    })?;

    reporter.success(&format!(
        "Location found: {}",
        str_field(first, "formatted_address")
    ));
    let location = first
        .get("geometry")
        .and_then(|g| g.get("location"))
        .cloned()
        .unwrap_or(Value::Null);
    reporter.detail(&format!("Latitude: {}", num_field(&location, "lat")));
    reporter.detail(&format!("Longitude: {}", num_field(&location, "lng")));
    Ok(())
}

pub fn nearby_search_check() -> EndpointCheck {
    EndpointCheck {
        name: "Google Maps - Nearby Search",
        title: "Google Maps - Nearby Places Search",
        announce: |reporter| {
            reporter.info(&format!(
                "Searching for: {NEARBY_KEYWORD} near {NEARBY_LOCATION} (radius: {NEARBY_RADIUS_M}m)"
            ));
        },
        build_url: nearby_search_url,
        validate: validate_nearby_search,
    }
}

pub fn nearby_search_url(creds: &Credentials) -> Result<Url, ProbeError> {
    let mut url = endpoint_url("/maps/api/place/nearbysearch/json")?;
    url.query_pairs_mut()
        .append_pair("location", NEARBY_LOCATION)
        .append_pair("radius", &NEARBY_RADIUS_M.to_string())
        .append_pair("keyword", NEARBY_KEYWORD)
        .append_pair("key", &creds.google_maps.value);
    Ok(url)
}

pub fn validate_nearby_search(payload: &Value, reporter: &Reporter) -> Result<(), ProbeError> {
    let results = payload
        .get("results")
        .and_then(Value::as_array)
        .ok_or_else(|| ProbeError::DataShape("nearby response has no results array".into()))?;

    reporter.success(&format!("Found {} places", results.len()));
    for (i, place) in results.iter().take(3).enumerate() {
        reporter.detail(&format!("{}. {}", i + 1, str_field(place, "name")));
        reporter.detail(&format!("   Address: {}", str_field(place, "vicinity")));
        reporter.detail(&format!("   Rating: {}/5", num_field(place, "rating")));
    }
    Ok(())
}

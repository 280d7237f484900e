//! Tests for the Google Maps checks: URL construction and validators

use std::sync::Arc;

use refoodify_probe::core::checks::google;
use refoodify_probe::core::probe::{Probe, ProbeError, Reporter};

use crate::common::{test_context, test_credentials, MockHttpClient};

fn reporter() -> Reporter {
    Reporter::new(false)
}

#[test]
fn geocoding_url_carries_address_and_key() {
    let url = google::geocoding_url(&test_credentials()).unwrap();
    assert_eq!(url.host_str(), Some("maps.googleapis.com"));
    assert_eq!(url.path(), "/maps/api/geocode/json");
    let query = url.query().unwrap();
    assert!(query.contains("address=Kigali%2C+Rwanda"));
    assert!(query.contains("key=maps-test-key"));
}

#[test]
fn nearby_url_carries_location_radius_and_keyword() {
    let url = google::nearby_search_url(&test_credentials()).unwrap();
    assert_eq!(url.path(), "/maps/api/place/nearbysearch/json");
    let query = url.query().unwrap();
    assert!(query.contains("location=-1.9441%2C30.0619"));
    assert!(query.contains("radius=5000"));
    assert!(query.contains("keyword=food+bank"));
}

#[test]
fn geocoding_result_validates() {
    let payload = serde_json::json!({
        "results": [{
            "formatted_address": "Kigali, Rwanda",
            "geometry": {"location": {"lat": -1.9536, "lng": 30.0606}},
        }],
        "status": "OK",
    });
    assert!(google::validate_geocoding(&payload, &reporter()).is_ok());
}

#[test]
fn empty_geocoding_results_are_a_soft_failure() {
    // A 200 with zero results is how a permission-restricted key shows up.
    let payload = serde_json::json!({"results": [], "status": "REQUEST_DENIED"});
    let err = google::validate_geocoding(&payload, &reporter()).unwrap_err();
    assert!(matches!(err, ProbeError::DataShape(_)));
    assert!(err.is_soft());
}

#[tokio::test]
async fn geocoding_probe_fails_but_does_not_panic_on_empty_results() {
    let client = Arc::new(MockHttpClient::new());
    client.push_json(200, r#"{"results": [], "status": "ZERO_RESULTS"}"#);
    let ctx = test_context(client);

    let err = google::geocoding_check().run(&ctx).await.unwrap_err();
    assert!(err.is_soft());
}

#[test]
fn nearby_results_validate_even_when_sparse() {
    let payload = serde_json::json!({
        "results": [
            {"name": "Kigali Food Bank", "vicinity": "KN 5 Rd", "rating": 4.2},
            {"name": "Community Pantry"},
        ],
    });
    assert!(google::validate_nearby_search(&payload, &reporter()).is_ok());

    // Zero places is still a pass; only a missing results array fails.
    let empty = serde_json::json!({"results": []});
    assert!(google::validate_nearby_search(&empty, &reporter()).is_ok());

    let malformed = serde_json::json!({"error_message": "invalid key"});
    let err = google::validate_nearby_search(&malformed, &reporter()).unwrap_err();
    assert!(matches!(err, ProbeError::DataShape(_)));
}

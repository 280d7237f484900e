//! Tests for the parametrized endpoint probe shape

use std::sync::Arc;

use refoodify_probe::core::probe::{EndpointCheck, Probe, ProbeError, Reporter};

use crate::common::{test_context, MockHttpClient};

fn trivial_check() -> EndpointCheck {
    EndpointCheck {
        name: "trivial",
        title: "Trivial",
        announce: |_: &Reporter| {},
        build_url: |_| Ok(url::Url::parse("https://example.com/check").unwrap()),
        validate: |payload, _| {
            payload
                .get("ok")
                .and_then(serde_json::Value::as_bool)
                .filter(|ok| *ok)
                .map(|_| ())
                .ok_or_else(|| ProbeError::DataShape("missing ok field".into()))
        },
    }
}

#[tokio::test]
async fn passes_on_200_with_expected_payload() {
    let client = Arc::new(MockHttpClient::new());
    client.push_json(200, r#"{"ok": true}"#);
    let ctx = test_context(client.clone());

    assert!(trivial_check().run(&ctx).await.is_ok());
    assert_eq!(client.requested_urls(), vec!["https://example.com/check"]);
}

#[tokio::test]
async fn non_200_is_a_protocol_error_with_truncated_body() {
    let client = Arc::new(MockHttpClient::new());
    client.push_json(500, &"e".repeat(400));
    let ctx = test_context(client);

    match trivial_check().run(&ctx).await {
        Err(ProbeError::Protocol { status, body }) => {
            assert_eq!(status, 500);
            assert!(body.len() <= 203);
        }
        other => panic!("expected protocol error, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_json_on_200_is_a_soft_failure() {
    let client = Arc::new(MockHttpClient::new());
    client.push_json(200, "<html>not json</html>");
    let ctx = test_context(client);

    let err = trivial_check().run(&ctx).await.unwrap_err();
    assert!(matches!(err, ProbeError::DataShape(_)));
    assert!(err.is_soft());
}

#[tokio::test]
async fn transport_errors_pass_through() {
    let client = Arc::new(MockHttpClient::new());
    client.push_transport_error("connection timed out");
    let ctx = test_context(client);

    let err = trivial_check().run(&ctx).await.unwrap_err();
    assert!(matches!(err, ProbeError::Transport(_)));
    assert!(!err.is_soft());
}

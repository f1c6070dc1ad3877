use crate::common::{self, TOKEN};
use httpmock::Method::GET;
use sourcearena_rs::{SaClient, SaError};
use std::time::Duration;

#[tokio::test]
async fn custom_user_agent_is_sent() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/")
            .header("user-agent", "my-agent/1.0");
        then.status(200).body("{}");
    });

    let client = SaClient::builder()
        .token(TOKEN)
        .base_url(common::base_url(&server))
        .user_agent("my-agent/1.0")
        .build()
        .unwrap();

    client.get_candle("X", "1400/01").await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn injected_http_client_is_used() {
    let server = common::setup_server();

    let mock = server.mock(|when, then| {
        when.method(GET)
            .path("/api/")
            .header("x-injected", "yes")
            .query_param("token", TOKEN);
        then.status(200).body("[]");
    });

    let mut headers = reqwest::header::HeaderMap::new();
    headers.insert("x-injected", reqwest::header::HeaderValue::from_static("yes"));
    let http = reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .unwrap();

    let client = SaClient::builder()
        .token(TOKEN)
        .base_url(common::base_url(&server))
        .custom_client(http)
        .build()
        .unwrap();

    client.get_price_history("X", 1).await.unwrap();
    mock.assert();
}

#[tokio::test]
async fn timeout_surfaces_as_http_error() {
    let server = common::setup_server();

    let _mock = server.mock(|when, then| {
        when.method(GET).path("/api/");
        then.status(200)
            .delay(Duration::from_millis(500))
            .body("[]");
    });

    let client = SaClient::builder()
        .token(TOKEN)
        .base_url(common::base_url(&server))
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.get_candle("X", "1400/01").await.unwrap_err();

    match err {
        SaError::Http(ref e) => assert!(e.is_timeout(), "expected timeout, got {e:?}"),
        ref other => panic!("expected Http error, got {other:?}"),
    }

    let msg = err.to_string();
    assert!(!msg.contains(TOKEN), "token leaked into error message: {msg}");
    assert!(!format!("{err:?}").contains(TOKEN), "token leaked into debug output");
}

#[tokio::test]
async fn connect_failure_does_not_leak_token() {
    // Nothing listens on port 1.
    let client = SaClient::builder()
        .token(TOKEN)
        .try_base_url("http://127.0.0.1:1/api/")
        .unwrap()
        .build()
        .unwrap();

    let err = client
        .get_single_symbol_information("X", Some("1402/01/01"))
        .await
        .unwrap_err();

    assert!(matches!(err, SaError::Http(_)), "got {err:?}");
    let msg = err.to_string();
    assert!(!msg.contains(TOKEN), "token leaked into error message: {msg}");
    assert!(!format!("{err:?}").contains(TOKEN), "token leaked into debug output");
}

#[test]
fn missing_token_is_rejected() {
    let err = SaClient::builder().build().unwrap_err();
    assert!(matches!(err, SaError::MissingToken));
}

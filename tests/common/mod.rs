#![allow(dead_code)]

use httpmock::MockServer;
use sourcearena_rs::{SaClient, SaError};
use url::Url;

pub const TOKEN: &str = "test-token";

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn base_url(server: &MockServer) -> Url {
    Url::parse(&format!("{}/api/", server.base_url())).unwrap()
}

pub fn client(server: &MockServer) -> SaClient {
    SaClient::builder()
        .token(TOKEN)
        .base_url(base_url(server))
        .build()
        .unwrap()
}

/// Query pairs, in wire order, of the request that produced `err`.
pub fn sent_query(err: &SaError) -> Vec<(String, String)> {
    let url = match err {
        SaError::Api { url, .. } | SaError::Request { url, .. } => url,
        other => panic!("error carries no URL: {other:?}"),
    };
    url.query_pairs().into_owned().collect()
}

pub fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

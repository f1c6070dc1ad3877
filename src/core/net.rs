use url::Url;

use crate::core::client::constants::TOKEN_PARAM;
use crate::core::{Payload, SaError};

/// Render `url` with the token value masked, for logs and error messages.
pub(crate) fn redacted(url: &Url) -> String {
    if !url.query_pairs().any(|(k, _)| k == TOKEN_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == TOKEN_PARAM {
                "***".to_string()
            } else {
                v.into_owned()
            };
            (k.into_owned(), v)
        })
        .collect();

    let mut masked = url.clone();
    masked.query_pairs_mut().clear().extend_pairs(pairs);
    masked.to_string()
}

/// Turn a raw HTTP response into a decoded payload.
///
/// Non-2xx statuses become [`SaError::Api`]. A 2xx body is decoded as JSON
/// whatever its declared content type; an empty body decodes to `null` and a
/// body that fails to decode becomes [`SaError::Request`].
pub(crate) async fn handle_response(resp: reqwest::Response) -> Result<Payload, SaError> {
    let status = resp.status();
    let url = resp.url().clone();
    let body = resp.text().await?;

    #[cfg(feature = "tracing")]
    tracing::debug!(status = status.as_u16(), url = %redacted(&url), bytes = body.len(), "response");

    decode_body(status.as_u16(), body, url)
}

fn decode_body(status: u16, body: String, url: Url) -> Result<Payload, SaError> {
    if !(200..300).contains(&status) {
        return Err(SaError::Api { status, body, url });
    }

    if body.trim().is_empty() {
        return Ok(Payload::Null);
    }

    match serde_json::from_str(&body) {
        Ok(payload) => Ok(payload),
        Err(source) => Err(SaError::Request { body, url, source }),
    }
}

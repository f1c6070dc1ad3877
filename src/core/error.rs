use thiserror::Error;
use url::Url;

use crate::core::net::redacted;

/// The primary error type for all fallible operations in this crate.
///
/// `Api`, `Request` and `OffDay` are the failures reported by the SourceArena
/// service itself; the remaining variants come from the transport or from
/// client configuration.
#[derive(Debug, Error)]
pub enum SaError {
    /// The server answered with a non-2xx status.
    #[error("API error: status {status} at {}: {body}", redacted(.url))]
    Api {
        /// The HTTP status code.
        status: u16,
        /// The raw response body.
        body: String,
        /// The URL that returned the error.
        url: Url,
    },

    /// The server answered with a 2xx status but the body is not valid JSON.
    #[error("Invalid response: {body} (URL: {})", redacted(.url))]
    Request {
        /// The raw response body.
        body: String,
        /// The URL that produced the body.
        url: Url,
        /// Why decoding failed.
        #[source]
        source: serde_json::Error,
    },

    /// The requested date had no trading session.
    ///
    /// `date` is `None` when the request targeted the latest session.
    #[error("The day {} is off", .date.as_deref().unwrap_or("today"))]
    OffDay {
        /// The date that was queried, as passed by the caller.
        date: Option<String>,
    },

    /// An error occurred during an HTTP request.
    ///
    /// The inner error never carries the request URL.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// The client was built without an API token.
    #[error("an API token is required")]
    MissingToken,
}

impl From<reqwest::Error> for SaError {
    fn from(e: reqwest::Error) -> Self {
        SaError::Http(e.without_url())
    }
}

impl SaError {
    /// The HTTP status code, for errors that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            SaError::Api { status, .. } => Some(*status),
            SaError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this error reports a non-trading day.
    pub fn is_off_day(&self) -> bool {
        matches!(self, SaError::OffDay { .. })
    }
}

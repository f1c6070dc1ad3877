//! Public client surface + builder.
//! Defaults (base URL, UA, token parameter) live in `constants`.

pub(crate) mod constants;

use crate::core::params::Query;
use crate::core::{Payload, SaError, net};
use constants::{DEFAULT_BASE_URL, USER_AGENT};
use reqwest::Client;
use std::fmt;
use std::time::Duration;
use url::Url;

/// Handle to the SourceArena API.
///
/// Holds the API token and a reusable HTTP session. Cloning is cheap and clones
/// share the same connection pool, so one client can serve any number of
/// concurrent requests.
///
/// The client never spawns or installs a runtime: its methods return futures
/// that run on whatever tokio runtime the caller drives them with.
#[derive(Clone)]
pub struct SaClient {
    http: Client,
    base_url: Url,
    token: String,
}

impl fmt::Debug for SaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SaClient")
            .field("base_url", &self.base_url.as_str())
            .field("token", &"***")
            .finish_non_exhaustive()
    }
}

impl SaClient {
    /// Create a client with default settings for `token`.
    ///
    /// No network traffic happens until the first request.
    ///
    /// # Errors
    ///
    /// Returns `SaError::MissingToken` for an empty token, or `SaError::Http`
    /// if the HTTP session cannot be created.
    pub fn new(token: impl Into<String>) -> Result<Self, SaError> {
        Self::builder().token(token).build()
    }

    /// Create a new builder.
    pub fn builder() -> SaClientBuilder {
        SaClientBuilder::default()
    }

    /// The endpoint every request is sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Issue a GET for `query` and decode the response.
    ///
    /// The token is appended to the query string; status and body are checked
    /// by the shared response handler.
    pub(crate) async fn get(&self, query: Query) -> Result<Payload, SaError> {
        let url = query.to_url(&self.base_url, &self.token);

        #[cfg(feature = "tracing")]
        tracing::debug!(url = %net::redacted(&url), "GET");

        let resp = self.http.get(url).send().await?;
        net::handle_response(resp).await
    }
}

/* ----------------------- Builder ----------------------- */

#[derive(Default)]
pub struct SaClientBuilder {
    token: Option<String>,
    base_url: Option<Url>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    custom_client: Option<Client>,
}

impl SaClientBuilder {
    /// Set the API token sent with every request.
    #[must_use]
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Override the API base (e.g., `https://sourcearena.ir/api/`).
    #[must_use]
    pub fn base_url(mut self, url: Url) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Override the API base from a string.
    ///
    /// # Errors
    ///
    /// Returns `SaError::Url` if `url` is not a valid absolute URL.
    pub fn try_base_url(self, url: &str) -> Result<Self, SaError> {
        Ok(self.base_url(Url::parse(url)?))
    }

    /// Override the User-Agent.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = Some(ua.into());
        self
    }

    /// Set a global request timeout (overall). Default: none.
    #[must_use]
    pub const fn timeout(mut self, dur: Duration) -> Self {
        self.timeout = Some(dur);
        self
    }

    /// Set a connect timeout. Default: none.
    #[must_use]
    pub const fn connect_timeout(mut self, dur: Duration) -> Self {
        self.connect_timeout = Some(dur);
        self
    }

    /// Use a pre-configured `reqwest::Client` as the HTTP session.
    ///
    /// The user agent and timeouts set on this builder are ignored when a
    /// custom client is supplied.
    #[must_use]
    pub fn custom_client(mut self, client: Client) -> Self {
        self.custom_client = Some(client);
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns `SaError::MissingToken` if no non-empty token was set, or
    /// `SaError::Http` if the HTTP session cannot be created.
    pub fn build(self) -> Result<SaClient, SaError> {
        let token = self
            .token
            .filter(|t| !t.is_empty())
            .ok_or(SaError::MissingToken)?;

        let base_url = match self.base_url {
            Some(u) => u,
            None => Url::parse(DEFAULT_BASE_URL)?,
        };

        let http = match self.custom_client {
            Some(c) => c,
            None => {
                let mut httpb =
                    Client::builder().user_agent(self.user_agent.as_deref().unwrap_or(USER_AGENT));

                if let Some(t) = self.timeout {
                    httpb = httpb.timeout(t);
                }
                if let Some(ct) = self.connect_timeout {
                    httpb = httpb.connect_timeout(ct);
                }

                httpb.build()?
            }
        };

        Ok(SaClient {
            http,
            base_url,
            token,
        })
    }
}

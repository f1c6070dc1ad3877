//! Centralized constants for the default endpoint and UA.

/// Default UA sent when no custom one is configured.
pub(crate) const USER_AGENT: &str = concat!("sourcearena-rs/", env!("CARGO_PKG_VERSION"));

/// SourceArena API base. Every endpoint is this URL plus query parameters.
pub(crate) const DEFAULT_BASE_URL: &str = "https://sourcearena.ir/api/";

/// Query parameter carrying the API token.
pub(crate) const TOKEN_PARAM: &str = "token";

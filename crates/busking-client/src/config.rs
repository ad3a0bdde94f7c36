//! Remote service configuration.
//!
//! The only setting is the service base URL. It is supplied by the
//! environment (or the command line) and parsed once at startup; every
//! endpoint URL is derived from it.

use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the service base URL.
pub const API_URL_ENV: &str = "BUSKING_API_URL";

/// Fallback variable name used by existing mobile build configurations.
pub const LEGACY_API_URL_ENV: &str = "EXPO_PUBLIC_API_URL";

/// Configuration errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Neither the flag nor any of the environment variables is set.
    #[error("no service base URL: set {API_URL_ENV} or pass --api-url")]
    MissingBaseUrl,

    /// The base URL does not parse.
    #[error("invalid service base URL {url:?}: {reason}")]
    InvalidBaseUrl {
        /// URL as supplied
        url: String,
        /// Parser message
        reason: String,
    },

    /// The base URL is not `http` or `https`.
    #[error("unsupported URL scheme {0:?}: expected http or https")]
    UnsupportedScheme(String),

    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Remote booking service location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    base_url: Url,
}

impl ServiceConfig {
    /// Parse a base URL. A missing trailing slash is added so endpoints
    /// nest under any path prefix.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let mut url = Url::parse(base_url.trim()).map_err(|e| ConfigError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::UnsupportedScheme(url.scheme().to_owned()));
        }

        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        url.set_query(None);
        url.set_fragment(None);

        Ok(Self { base_url: url })
    }

    /// Read the base URL from [`API_URL_ENV`], then [`LEGACY_API_URL_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the base URL through `lookup` (environment access seam).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let url = [API_URL_ENV, LEGACY_API_URL_ENV]
            .into_iter()
            .filter_map(&lookup)
            .find(|value| !value.trim().is_empty())
            .ok_or(ConfigError::MissingBaseUrl)?;

        Self::new(&url)
    }

    /// Normalized base URL (always ends with `/`).
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Endpoint URL for the given path segments, with a trailing slash.
    ///
    /// Segments are percent-encoded, so opaque ids cannot escape their path
    /// position.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty();
            path.extend(segments);
            path.push("");
        }
        url
    }
}

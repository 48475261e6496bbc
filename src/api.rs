// API client module: a small blocking HTTP client for the redirect
// service. The CLI performs at most one request per invocation, so
// everything here is synchronous.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::StatusCode;
use tracing::debug;

use crate::config::Config;

/// Header carrying the API key on every request.
const API_KEY_HEADER: &str = "x-api-key";

/// Outbound request timeout. Hardening only; the service defines none.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Whether `version()` memoizes the first successful response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionCache {
    /// Every call issues a fresh request. This is the CLI default: the
    /// process is short-lived, so a memo would never pay off.
    No,
    /// The first successful body is kept for the lifetime of the client
    /// and returned on later calls without a network request.
    Memo,
}

/// Blocking client for the redirect service. Holds the base URL and API key
/// taken from the loaded configuration; neither is mutated afterwards.
///
/// Responses are returned verbatim: no retries, no status-code validation.
/// A failed request surfaces as the underlying transport error, and a non-2xx
/// answer is handed to the caller exactly as the server sent it.
pub struct LinkClient {
    client: Client,
    base_url: String,
    key: String,
    cache: VersionCache,
    cached_version: Option<String>,
}

impl LinkClient {
    /// Build a client from the loaded configuration with the default
    /// no-cache version policy.
    pub fn new(config: &Config) -> Result<Self> {
        Self::with_cache_policy(config, VersionCache::No)
    }

    pub fn with_cache_policy(config: &Config, cache: VersionCache) -> Result<Self> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;
        Ok(LinkClient {
            client,
            base_url: config.url.clone(),
            key: config.key.clone(),
            cache,
            cached_version: None,
        })
    }

    /// Headers attached to every request. The content-type stays
    /// `application/json` even on the form POST; the server expects it
    /// that way.
    fn headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let key =
            HeaderValue::from_str(&self.key).context("API key is not a valid header value")?;
        headers.insert(API_KEY_HEADER, key);
        Ok(headers)
    }

    /// Fetch the service version string.
    pub fn version(&mut self) -> Result<String> {
        if self.cache == VersionCache::Memo {
            if let Some(cached) = &self.cached_version {
                return Ok(cached.clone());
            }
        }

        let url = format!("{}/api/version", self.base_url);
        debug!(%url, "GET version");
        let text = self
            .client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .context("failed to send version request")?
            .text()
            .context("failed to read version response")?;

        if self.cache == VersionCache::Memo {
            self.cached_version = Some(text.clone());
        }
        Ok(text)
    }

    /// Fetch the raw redirect listing, one `NUM: ALIAS -> URL` entry per
    /// line.
    pub fn redirects(&self) -> Result<String> {
        let url = format!("{}/api/redirects", self.base_url);
        debug!(%url, "GET redirects");
        self.client
            .get(&url)
            .headers(self.headers()?)
            .send()
            .context("failed to send redirects request")?
            .text()
            .context("failed to read redirects response")
    }

    /// Create a new alias by POSTing form fields `alias` and `url`.
    /// Returns the raw status and body; the answer is not interpreted here.
    pub fn create_redirect(&self, alias: &str, url: &str) -> Result<(StatusCode, String)> {
        let endpoint = format!("{}/api/newredirect", self.base_url);
        debug!(%endpoint, alias, "POST new redirect");
        let res = self
            .client
            .post(&endpoint)
            .form(&[("alias", alias), ("url", url)])
            // headers go after the form so the json content-type wins
            .headers(self.headers()?)
            .send()
            .context("failed to send create request")?;

        let status = res.status();
        debug!(%status, "create response");
        let body = res.text().context("failed to read create response")?;
        Ok((status, body))
    }
}

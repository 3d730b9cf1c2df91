// client.rs - Blocking HTTP page fetcher

use std::time::Duration;

use super::error::FetchError;

/// HTTP request timeout for a single attempt.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = concat!("pazyscrape/", env!("CARGO_PKG_VERSION"));

/// Source of page text, keyed by URL.
///
/// The harvesting pipeline only talks to the network through this trait, so
/// tests can serve fixture pages from memory.
pub trait PageFetcher {
    /// Fetch the body of `url` as text. Non-2xx responses are errors.
    fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

impl<F: PageFetcher + ?Sized> PageFetcher for &F {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        (**self).fetch_text(url)
    }
}

/// [`PageFetcher`] backed by a blocking `reqwest` client.
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    /// Build a fetcher. `accept_invalid_certs` disables TLS certificate checks,
    /// which the PAZy host has needed in the past.
    pub fn new(accept_invalid_certs: bool) -> Result<Self, String> {
        if accept_invalid_certs {
            tracing::warn!("TLS certificate verification is disabled");
        }

        let client = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(accept_invalid_certs)
            .build()
            .map_err(|e| format!("Failed to build HTTP client: {}", e))?;

        Ok(Self { client })
    }
}

impl PageFetcher for HttpFetcher {
    fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }
        Ok(response.text()?)
    }
}

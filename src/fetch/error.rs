// error.rs - Errors raised while fetching remote pages

/// Error type for page and sequence fetches.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The underlying HTTP request failed (network, DNS, TLS, timeout, body decoding).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote server answered with a non-2xx status code.
    #[error("server returned HTTP {0}")]
    HttpStatus(u16),

    /// Every attempt allowed by the retry policy failed.
    #[error("failed to fetch {url} after {attempts} attempts: {last}")]
    Exhausted {
        url: String,
        attempts: u32,
        last: Box<FetchError>,
    },
}

impl FetchError {
    /// Status code of the failure, looking through retry exhaustion.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::HttpStatus(code) => Some(*code),
            FetchError::Request(e) => e.status().map(|s| s.as_u16()),
            FetchError::Exhausted { last, .. } => last.status(),
        }
    }
}

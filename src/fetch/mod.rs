// mod.rs - Page fetching module root

pub mod client;
pub mod error;
pub mod retry;

// Re-export main types for convenience
pub use client::{HttpFetcher, PageFetcher};
pub use error::FetchError;
pub use retry::{fetch_with_retries, RetryPolicy};

pub mod client;

pub use client::RepositoryClient;

use reqwest::Client;
use std::time::Duration;

/// Origin of the IDeTRUST credential repository
pub const DEFAULT_BASE_URL: &str = "https://idetrust.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct RepositoryConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for RepositoryConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Create the HTTP client used for repository lookups
pub fn create_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .use_rustls_tls()
        .build()
}

/// Compose the URL of a certificate in the repository.
///
/// Identifiers are inserted as-is; the HTTP layer escapes the URL as a whole.
pub fn build_url(base_url: &str, daid: &str, cid: &str) -> String {
    format!("{}/daid/{daid}/cid/{cid}", base_url.trim_end_matches('/'))
}

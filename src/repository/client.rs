use crate::repository::{build_url, create_http_client, RepositoryConfig};
use crate::utils::errors::{Result, RetrievalError, RetrievalResult, TransportError};
use reqwest::{Client, Response, StatusCode};

/// Client for the certificate repository's `/daid/<daid>/cid/<cid>` endpoint
#[derive(Clone, Debug)]
pub struct RepositoryClient {
    client: Client,
    base_url: String,
}

impl RepositoryClient {
    pub fn new(config: &RepositoryConfig) -> Result<Self> {
        let client = create_http_client(config.timeout)?;

        Ok(Self::with_client(client, config.base_url.clone()))
    }

    /// Wrap an existing client (it is internally pooled and cheap to clone)
    pub fn with_client(client: Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn certificate_url(&self, daid: &str, cid: &str) -> String {
        build_url(&self.base_url, daid, cid)
    }

    /// Fetch the text dump of a certificate and its chain
    pub async fn fetch_dump(&self, daid: &str, cid: &str) -> RetrievalResult<String> {
        let url = self.certificate_url(daid, cid);
        tracing::debug!("Making GET request to: {url}");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| RetrievalError::transport(&url, e))?;

        tracing::debug!("Response status: {}", response.status());
        Self::handle_response(&url, response).await
    }

    /// Classify the response and read its body. The response is consumed on
    /// every path, which returns the connection to the pool.
    async fn handle_response(url: &str, response: Response) -> RetrievalResult<String> {
        let status = response.status();

        if status == StatusCode::BAD_REQUEST {
            Err(RetrievalError::BadRequest {
                target: url.to_string(),
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(RetrievalError::NotFound {
                target: url.to_string(),
            })
        } else if status.is_success() {
            response
                .text()
                .await
                .map_err(|e| RetrievalError::transport(url, e))
        } else {
            tracing::warn!("Unexpected status {status} from {url}");
            Err(RetrievalError::transport(url, TransportError::Status(status)))
        }
    }
}

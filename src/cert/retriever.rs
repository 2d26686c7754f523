use crate::cert::extractor::extract;
use crate::cert::info::CertificateInfo;
use crate::repository::{RepositoryClient, RepositoryConfig};
use crate::utils::errors::{Result, RetrievalError, RetrievalResult};
use std::io::ErrorKind;
use std::path::Path;
use tokio::io::AsyncReadExt;

/// Something that yields a certificate dump and knows how to label the result
pub(crate) trait DumpSource {
    /// Human readable location, used in logs
    fn describe(&self) -> String;

    async fn read_dump(&self) -> RetrievalResult<String>;

    fn stamp(&self, info: CertificateInfo) -> CertificateInfo;
}

pub(crate) struct RepositorySource<'a> {
    client: &'a RepositoryClient,
    daid: &'a str,
    cid: &'a str,
}

impl DumpSource for RepositorySource<'_> {
    fn describe(&self) -> String {
        self.client.certificate_url(self.daid, self.cid)
    }

    async fn read_dump(&self) -> RetrievalResult<String> {
        self.client.fetch_dump(self.daid, self.cid).await
    }

    fn stamp(&self, info: CertificateInfo) -> CertificateInfo {
        info.stamp(self.daid, self.cid)
    }
}

pub(crate) struct FileSource<'a> {
    path: &'a Path,
}

impl DumpSource for FileSource<'_> {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn read_dump(&self) -> RetrievalResult<String> {
        let target = self.describe();

        let mut file = tokio::fs::File::open(self.path)
            .await
            .map_err(|e| RetrievalError::transport(&target, e))?;

        let mut content = String::new();
        file.read_to_string(&mut content)
            .await
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidData => RetrievalError::BadRequest {
                    target: target.clone(),
                },
                _ => RetrievalError::transport(&target, e),
            })?;

        Ok(content)
    }

    fn stamp(&self, info: CertificateInfo) -> CertificateInfo {
        info.stamp_unavailable()
    }
}

/// Retrieves certificate information from the repository or from local dumps.
///
/// Every call fetches and parses from scratch; nothing is cached or retried.
#[derive(Clone, Debug)]
pub struct CertificateRetriever {
    client: RepositoryClient,
}

impl CertificateRetriever {
    pub fn new(config: &RepositoryConfig) -> Result<Self> {
        Ok(Self::with_client(RepositoryClient::new(config)?))
    }

    pub fn with_client(client: RepositoryClient) -> Self {
        Self { client }
    }

    /// Retrieve a certificate by DAID and CID from the repository
    pub async fn retrieve_from_network(
        &self,
        daid: &str,
        cid: &str,
    ) -> RetrievalResult<CertificateInfo> {
        let source = RepositorySource {
            client: &self.client,
            daid,
            cid,
        };
        retrieve(&source).await
    }

    /// Retrieve a certificate from a local dump file
    pub async fn retrieve_from_file(&self, path: &Path) -> RetrievalResult<CertificateInfo> {
        retrieve(&FileSource { path }).await
    }
}

async fn retrieve<S: DumpSource>(source: &S) -> RetrievalResult<CertificateInfo> {
    tracing::info!("Retrieving certificate from {}", source.describe());

    let dump = source.read_dump().await?;
    let info = extract(&dump).inspect_err(|e| {
        tracing::debug!("Extraction failed for {}: {e}", source.describe());
    })?;

    Ok(source.stamp(info))
}

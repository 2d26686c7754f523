pub mod cert;
pub mod cli;
pub mod repository;
pub mod utils;

pub use cert::{extract, CertificateInfo, CertificateRetriever};
pub use cli::{args, commands};
pub use repository::{build_url, RepositoryClient, RepositoryConfig};
pub use utils::errors::{self, CertInfoError, RetrievalError};

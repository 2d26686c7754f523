pub mod extractor;
pub mod info;
pub mod retriever;

pub use extractor::extract;
pub use info::CertificateInfo;
pub use retriever::CertificateRetriever;

use thiserror::Error;

/// Underlying I/O failure behind a [`RetrievalError::TransportFailure`]
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
}

/// Outcome of a single failed retrieval. `target` is the URL or path involved.
#[derive(Error, Debug)]
pub enum RetrievalError {
    #[error("Bad request: {target}")]
    BadRequest { target: String },

    #[error("Certificate not found: {target}")]
    NotFound { target: String },

    #[error("Malformed certificate dump: missing or invalid {field}")]
    MalformedContent { field: &'static str },

    #[error("Transport failure for {target}: {source}")]
    TransportFailure {
        target: String,
        #[source]
        source: TransportError,
    },
}

impl RetrievalError {
    pub fn malformed(field: &'static str) -> Self {
        Self::MalformedContent { field }
    }

    pub fn transport(target: impl Into<String>, source: impl Into<TransportError>) -> Self {
        Self::TransportFailure {
            target: target.into(),
            source: source.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum CertInfoError {
    #[error("{0}")]
    Retrieval(#[from] RetrievalError),

    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CertInfoError>;
pub type RetrievalResult<T> = std::result::Result<T, RetrievalError>;

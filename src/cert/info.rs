use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// Display and serialization format for validity timestamps
pub const VALIDITY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Subject, issuer and validity window of a DigSig X.509 certificate.
///
/// `cid` and `daid` are stamped by the retriever after extraction: either both
/// carry the repository identifiers or both carry [`CertificateInfo::NOT_AVAILABLE`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificateInfo {
    pub cid: String,
    pub daid: String,
    pub issuer: String,
    pub subject: String,
    #[serde(serialize_with = "serialize_validity")]
    pub not_before: DateTime<Utc>,
    #[serde(serialize_with = "serialize_validity")]
    pub not_after: DateTime<Utc>,
}

impl CertificateInfo {
    /// Identifier placeholder for certificates read from a local file
    pub const NOT_AVAILABLE: &'static str = "Not available";

    /// Create an unstamped record
    pub fn new(
        issuer: String,
        subject: String,
        not_before: DateTime<Utc>,
        not_after: DateTime<Utc>,
    ) -> Self {
        Self {
            cid: String::new(),
            daid: String::new(),
            issuer,
            subject,
            not_before,
            not_after,
        }
    }

    /// Stamp with the repository identifiers the certificate was fetched under
    pub fn stamp(mut self, daid: &str, cid: &str) -> Self {
        self.daid = daid.to_string();
        self.cid = cid.to_string();
        self
    }

    /// Stamp with the "Not available" sentinel
    pub fn stamp_unavailable(self) -> Self {
        self.stamp(Self::NOT_AVAILABLE, Self::NOT_AVAILABLE)
    }

    pub fn not_before_display(&self) -> String {
        self.not_before.format(VALIDITY_FORMAT).to_string()
    }

    pub fn not_after_display(&self) -> String {
        self.not_after.format(VALIDITY_FORMAT).to_string()
    }

    /// Labeled fields in display order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("CID", self.cid.clone()),
            ("DAID", self.daid.clone()),
            ("Issuer", self.issuer.clone()),
            ("Subject", self.subject.clone()),
            ("NotBefore", self.not_before_display()),
            ("NotAfter", self.not_after_display()),
        ]
    }
}

fn serialize_validity<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(VALIDITY_FORMAT))
}

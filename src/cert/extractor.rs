use crate::cert::info::{CertificateInfo, VALIDITY_FORMAT};
use crate::utils::errors::{RetrievalError, RetrievalResult};
use chrono::{DateTime, NaiveDateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

// Line-anchored label patterns for the text dump of a certificate chain.
// Validity values look like `2026-01-08T07:34:23Z`.
static SUBJECT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*Subject[ \t]*:(.*)$").unwrap());
static NOT_BEFORE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*NotBefore[ \t]*:(.*)$").unwrap());
static NOT_AFTER_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?m)^[ \t]*NotAfter[ \t]*:(.*)$").unwrap());
static VALIDITY_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\S+)T(\S+)Z$").unwrap());

/// Extract subject, issuer and validity from a certificate dump.
///
/// The dump holds the leaf certificate first, followed by its issuing chain.
/// The first `Subject:` line is the leaf's subject and the second one is its
/// issuer's. A dump with a single certificate is treated as standalone, so
/// issuer and subject are the same. Validity comes from the first
/// `NotBefore:`/`NotAfter:` lines, which belong to the leaf.
///
/// The returned record carries no identifiers; the caller stamps them.
pub fn extract(content: &str) -> RetrievalResult<CertificateInfo> {
    let subjects = subject_lines(content)?;

    let (subject, issuer) = match subjects.as_slice() {
        [leaf, issuer] => (leaf.to_string(), issuer.to_string()),
        [leaf] => {
            tracing::debug!("Dump holds a single certificate, using subject as issuer");
            (leaf.to_string(), leaf.to_string())
        }
        _ => return Err(RetrievalError::malformed("Subject")),
    };

    let not_before = validity(&NOT_BEFORE_PATTERN, content, "NotBefore")?;
    let not_after = validity(&NOT_AFTER_PATTERN, content, "NotAfter")?;

    tracing::trace!("Extracted subject '{subject}', issuer '{issuer}'");

    Ok(CertificateInfo::new(issuer, subject, not_before, not_after))
}

/// Up to two trimmed subject values in document order
fn subject_lines(content: &str) -> RetrievalResult<Vec<&str>> {
    SUBJECT_PATTERN
        .captures_iter(content)
        .take(2)
        .map(|caps| {
            let value = caps.get(1).map_or("", |m| m.as_str().trim());
            if value.is_empty() {
                Err(RetrievalError::malformed("Subject"))
            } else {
                Ok(value)
            }
        })
        .collect()
}

/// Parse the first line carrying `field`. Only that line is considered, so a
/// malformed leaf value never falls through to a chain certificate's line.
fn validity(pattern: &Regex, content: &str, field: &'static str) -> RetrievalResult<DateTime<Utc>> {
    let value = pattern
        .captures(content)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .ok_or_else(|| RetrievalError::malformed(field))?;

    let parts = VALIDITY_VALUE.captures(value).ok_or_else(|| {
        tracing::debug!("{field} value '{value}' is not in <date>T<time>Z form");
        RetrievalError::malformed(field)
    })?;

    let timestamp = format!("{} {}", &parts[1], &parts[2]);
    let parsed = NaiveDateTime::parse_from_str(&timestamp, VALIDITY_FORMAT).map_err(|e| {
        tracing::debug!("Invalid {field} timestamp '{timestamp}': {e}");
        RetrievalError::malformed(field)
    })?;

    Ok(parsed.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;

    const CHAIN: &str = "\
Certificate:
Subject: CN=https://idetrust.com/daid/QC%20DEMO/cid/1,O=IDeTRUST GmbH,C=DE
NotBefore: 2026-01-08T07:34:23Z
NotAfter: 2027-01-08T07:34:23Z

Certificate:
Subject: CN=QC DigSig Demo QC-DEMO https://www.idetrust.io 2026,O=QC DigSig Demo Inc.,L=Delmenhorst,C=DE
NotBefore: 2025-12-01T00:00:00Z
NotAfter: 2030-12-01T00:00:00Z
";

    #[test]
    fn test_extract_leaf_and_issuer() {
        let info = extract(CHAIN).unwrap();

        assert_eq!(
            info.subject,
            "CN=https://idetrust.com/daid/QC%20DEMO/cid/1,O=IDeTRUST GmbH,C=DE"
        );
        assert_eq!(
            info.issuer,
            "CN=QC DigSig Demo QC-DEMO https://www.idetrust.io 2026,O=QC DigSig Demo Inc.,L=Delmenhorst,C=DE"
        );
        assert_eq!(info.not_before_display(), "2026-01-08 07:34:23");
        assert_eq!(info.not_after_display(), "2027-01-08 07:34:23");
        assert!(info.cid.is_empty());
        assert!(info.daid.is_empty());
    }

    #[test]
    fn test_extract_is_repeatable() {
        assert_eq!(extract(CHAIN).unwrap(), extract(CHAIN).unwrap());
    }

    #[test]
    fn test_single_certificate_is_its_own_issuer() {
        let dump = "Subject: CN=Standalone,C=DE\nNotBefore: 2024-02-29T12:00:00Z\nNotAfter: 2025-02-28T12:00:00Z\n";
        let info = extract(dump).unwrap();

        assert_eq!(info.subject, "CN=Standalone,C=DE");
        assert_eq!(info.issuer, info.subject);
    }

    #[test]
    fn test_only_first_two_subjects_are_used() {
        let dump = format!("{CHAIN}\nCertificate:\nSubject: CN=Root CA,C=DE\n");
        let info = extract(&dump).unwrap();

        assert!(info.issuer.starts_with("CN=QC DigSig Demo"));
    }

    #[test]
    fn test_indentation_and_whitespace_tolerated() {
        let dump = "  Subject :   CN=leaf,O=Org  \r\n\tSubject:CN=ca\r\n  NotBefore:  2026-01-08T07:34:23Z  \r\n  NotAfter: 2027-01-08T07:34:23Z\r\n";
        let info = extract(dump).unwrap();

        assert_eq!(info.subject, "CN=leaf,O=Org");
        assert_eq!(info.issuer, "CN=ca");
        assert_eq!(info.not_after_display(), "2027-01-08 07:34:23");
    }

    #[test]
    fn test_subject_public_key_info_is_not_a_subject() {
        let dump = "Subject Public Key Info:\nSubject: CN=leaf\nNotBefore: 2026-01-08T07:34:23Z\nNotAfter: 2027-01-08T07:34:23Z\n";
        let info = extract(dump).unwrap();

        assert_eq!(info.subject, "CN=leaf");
        assert_eq!(info.issuer, "CN=leaf");
    }

    #[test]
    fn test_missing_subject() {
        let dump = "NotBefore: 2026-01-08T07:34:23Z\nNotAfter: 2027-01-08T07:34:23Z\n";
        assert!(matches!(
            extract(dump),
            Err(RetrievalError::MalformedContent { field: "Subject" })
        ));
    }

    #[test]
    fn test_empty_subject_value() {
        let dump = "Subject:   \nNotBefore: 2026-01-08T07:34:23Z\nNotAfter: 2027-01-08T07:34:23Z\n";
        assert!(matches!(
            extract(dump),
            Err(RetrievalError::MalformedContent { field: "Subject" })
        ));
    }

    #[test]
    fn test_missing_validity() {
        let dump = "Subject: CN=leaf\nNotAfter: 2027-01-08T07:34:23Z\n";
        assert!(matches!(
            extract(dump),
            Err(RetrievalError::MalformedContent { field: "NotBefore" })
        ));

        let dump = "Subject: CN=leaf\nNotBefore: 2026-01-08T07:34:23Z\n";
        assert!(matches!(
            extract(dump),
            Err(RetrievalError::MalformedContent { field: "NotAfter" })
        ));
    }

    #[test]
    fn test_invalid_timestamp() {
        let dump = "Subject: CN=leaf\nNotBefore: 2026-13-40T07:34:23Z\nNotAfter: 2027-01-08T07:34:23Z\n";
        assert!(matches!(
            extract(dump),
            Err(RetrievalError::MalformedContent { field: "NotBefore" })
        ));
    }

    #[test]
    fn test_validity_requires_utc_marker() {
        let dump = "Subject: CN=leaf\nNotBefore: 2026-01-08 07:34:23\nNotAfter: 2027-01-08T07:34:23Z\n";
        assert!(matches!(
            extract(dump),
            Err(RetrievalError::MalformedContent { field: "NotBefore" })
        ));
    }

    #[test]
    fn test_bad_leaf_validity_does_not_fall_back_to_chain() {
        let dump = "\
Subject: CN=leaf
NotBefore: 2026-01-08 07:34:23
NotAfter: 2027-01-08T07:34:23Z
Subject: CN=ca
NotBefore: 2020-01-01T00:00:00Z
NotAfter: 2030-01-01T00:00:00Z
";
        assert!(matches!(
            extract(dump),
            Err(RetrievalError::MalformedContent { field: "NotBefore" })
        ));

        let dump = "\
Subject: CN=leaf
NotBefore: 2026-01-08T07:34:23Z
NotAfter:
Subject: CN=ca
NotBefore: 2020-01-01T00:00:00Z
NotAfter: 2030-01-01T00:00:00Z
";
        assert!(matches!(
            extract(dump),
            Err(RetrievalError::MalformedContent { field: "NotAfter" })
        ));
    }
}

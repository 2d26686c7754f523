use crate::cert::CertificateInfo;
use crate::utils::errors::Result;
use std::fmt::Display;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    /// `Label: value` lines
    Text,
    /// Tab-separated `label\tvalue` lines
    Raw,
    /// Pretty-printed JSON object
    Json,
}

/// Output format configuration
#[derive(Clone, Debug)]
pub struct OutputFormat {
    pub mode: OutputMode,
}

impl OutputFormat {
    pub fn new(raw: bool, json: bool) -> Self {
        let mode = if json {
            OutputMode::Json
        } else if raw {
            OutputMode::Raw
        } else {
            OutputMode::Text
        };
        Self { mode }
    }

    pub fn render_certificate(&self, info: &CertificateInfo) -> Result<String> {
        match self.mode {
            OutputMode::Json => Ok(serde_json::to_string_pretty(info)?),
            _ => Ok(self.render_key_value(&info.fields())),
        }
    }

    pub fn print_certificate(&self, info: &CertificateInfo) -> Result<()> {
        println!("{}", self.render_certificate(info)?);
        Ok(())
    }

    /// Render key-value pairs, one per line
    pub fn render_key_value<K, V>(&self, pairs: &[(K, V)]) -> String
    where
        K: Display,
        V: Display,
    {
        let separator = if self.mode == OutputMode::Raw { "\t" } else { ": " };

        pairs
            .iter()
            .map(|(k, v)| format!("{k}{separator}{v}"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

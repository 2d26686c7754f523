use crate::repository::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "certinfo")]
#[command(version = "1.0.0")]
#[command(about = "Show the useful information about DigSig X.509 certificates")]
#[command(long_about = None)]
pub struct Cli {
    /// Certificate repository base URL
    #[arg(long, env = "CERTINFO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "CERTINFO_TIMEOUT", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Enable verbose logging (repeat for more verbosity: -v INFO, -vv DEBUG, -vvv TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output raw tab-separated values (no formatting)
    #[arg(short, long, conflicts_with = "json")]
    pub raw: bool,

    /// Output JSON
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the useful information about a certain DigSig X.509 certificate
    Certinfo {
        /// The certificate's DAID
        #[arg(long, value_hint = clap::ValueHint::Other)]
        daid: String,

        /// The certificate's CID
        #[arg(long, value_hint = clap::ValueHint::Other)]
        cid: String,
    },
    /// Show the same information from a local certificate dump
    File {
        /// Path to the certificate dump
        #[arg(value_hint = clap::ValueHint::FilePath)]
        path: PathBuf,
    },
    /// Generate shell completion scripts
    Completion {
        /// Target shell
        shell: Shell,
    },
}

use crate::cert::CertificateRetriever;
use crate::cli::args::*;
use crate::cli::completions::handle_completion_command;
use crate::repository::RepositoryConfig;
use crate::utils::errors::{CertInfoError, Result};
use crate::utils::output::OutputFormat;
use std::io;
use std::path::Path;
use std::time::Duration;

pub async fn handle_command(cli: Cli) -> Result<()> {
    if !cli.quiet {
        init_logging(cli.verbose);
    }

    let output = OutputFormat::new(cli.raw, cli.json);

    match cli.command {
        Commands::Certinfo { ref daid, ref cid } => {
            let retriever = retriever_for(&cli)?;
            handle_certinfo_command(&retriever, daid, cid, &output).await
        }
        Commands::File { ref path } => {
            let retriever = retriever_for(&cli)?;
            handle_file_command(&retriever, path, &output).await
        }
        Commands::Completion { shell } => handle_completion_command(shell),
    }
}

/// Log to stderr; `-v` raises the level from warn up to trace
fn init_logging(verbose: u8) {
    let level = ["warn", "info", "debug", "trace"][usize::from(verbose.min(3))];

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(format!("certinfo={level}"))
        .init();
}

/// Repository flags only matter for network lookups, so local dumps are
/// read with the default configuration whatever `--base-url` says.
pub fn retriever_for(cli: &Cli) -> Result<CertificateRetriever> {
    let config = match cli.command {
        Commands::Certinfo { .. } => repository_config(cli)?,
        _ => RepositoryConfig::default(),
    };
    CertificateRetriever::new(&config)
}

/// Build the repository configuration from command line flags
pub fn repository_config(cli: &Cli) -> Result<RepositoryConfig> {
    if cli.timeout == 0 {
        return Err(CertInfoError::Config(
            "Timeout must be at least one second".to_string(),
        ));
    }
    if !cli.base_url.starts_with("http://") && !cli.base_url.starts_with("https://") {
        return Err(CertInfoError::Config(format!(
            "Repository URL must start with http:// or https://: {}",
            cli.base_url
        )));
    }

    Ok(RepositoryConfig {
        base_url: cli.base_url.clone(),
        timeout: Duration::from_secs(cli.timeout),
    })
}

async fn handle_certinfo_command(
    retriever: &CertificateRetriever,
    daid: &str,
    cid: &str,
    output: &OutputFormat,
) -> Result<()> {
    let info = retriever.retrieve_from_network(daid, cid).await?;
    output.print_certificate(&info)
}

async fn handle_file_command(
    retriever: &CertificateRetriever,
    path: &Path,
    output: &OutputFormat,
) -> Result<()> {
    let info = retriever.retrieve_from_file(path).await?;
    output.print_certificate(&info)
}

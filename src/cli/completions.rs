use crate::cli::args::Cli;
use crate::utils::errors::Result;
use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;

pub fn handle_completion_command(shell: Shell) -> Result<()> {
    write_completions(shell, &mut io::stdout());
    Ok(())
}

/// Write the completion script for `shell`
pub fn write_completions<W: io::Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    let app_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, app_name, out);
}

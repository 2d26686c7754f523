use certinfo::cli::{handle_command, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    if let Err(e) = handle_command(Cli::parse()).await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

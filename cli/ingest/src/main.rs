//! ds-ingest CLI
//!
//! Loads documents from DigitalOcean Spaces and writes them to stdout.

use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for documents)
    ds_cli_common::init_logging(args.log_level)?;

    let count = run::execute(args).await?;

    // Report results to stderr
    eprintln!();
    eprintln!("Ingestion completed:");
    eprintln!("  Documents written: {count}");

    Ok(())
}

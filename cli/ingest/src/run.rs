//! Execution logic for ds-ingest.

use anyhow::Result;
use ds_spaces::{SpacesConfig, SpacesConnector};
use tracing::info;

use crate::args::Cli;

/// Build the connector configuration from CLI arguments.
fn build_config(args: &Cli) -> SpacesConfig {
    let mut config = SpacesConfig::new(
        &args.bucket,
        &args.key_id,
        &args.secret_key,
        &args.endpoint,
    )
    .with_prefix(&args.prefix)
    .with_recursive(!args.no_recursive)
    .with_filename_as_id(!args.uuid_ids);

    if let Some(key) = &args.key {
        config = config.with_key(key);
    }
    if let Some(region) = &args.region {
        config = config.with_region(region);
    }
    if !args.required_exts.is_empty() {
        config = config.with_required_exts(args.required_exts.iter().cloned());
    }
    if args.max_files > 0 {
        config = config.with_num_files_limit(args.max_files);
    }

    config
}

/// Load documents and write them to stdout.
///
/// Returns the number of documents written.
pub async fn execute(args: Cli) -> Result<usize> {
    let output_format = args.output_format;
    let config = build_config(&args);

    info!(
        bucket = %config.bucket,
        key = ?config.key,
        prefix = %config.prefix,
        endpoint = %config.endpoint,
        "Starting ingestion"
    );

    let connector = SpacesConnector::new(config);
    let documents = connector.load().await?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    ds_cli_common::write_documents(&mut out, &documents, output_format)?;

    Ok(documents.len())
}

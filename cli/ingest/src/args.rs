//! CLI argument definitions for ds-ingest.

use clap::Parser;
use ds_cli_common::{DocumentFormat, LogLevel};

/// Load documents from DigitalOcean Spaces.
///
/// Resolves a single object key or enumerates a bucket/prefix, parses
/// each file into documents, and writes them to stdout (JSONL by
/// default, one JSON object per line).
///
/// ## Examples
///
/// Load a whole prefix:
///   ds-ingest -b docs-bucket -p reports/ --endpoint https://nyc3.digitaloceanspaces.com
///
/// Load one object:
///   ds-ingest -b docs-bucket -k reports/summary.txt --endpoint https://nyc3.digitaloceanspaces.com
///
/// Restrict extensions and cap the file count:
///   ds-ingest -b docs-bucket --ext txt --ext md --max-files 100 \
///       --endpoint https://nyc3.digitaloceanspaces.com
#[derive(Parser, Debug)]
#[command(name = "ds-ingest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Spaces configuration ===
    /// Bucket (Space) name
    #[arg(short, long, env = "DO_SPACES_BUCKET")]
    pub bucket: String,

    /// Object key to load instead of enumerating the bucket
    #[arg(short, long)]
    pub key: Option<String>,

    /// Prefix to enumerate under (empty = bucket root)
    #[arg(short, long, default_value = "")]
    pub prefix: String,

    /// Spaces endpoint URL
    #[arg(long, env = "DO_SPACES_ENDPOINT")]
    pub endpoint: String,

    /// Spaces access key ID
    #[arg(long, env = "DO_SPACES_KEY_ID")]
    pub key_id: String,

    /// Spaces secret access key
    #[arg(long, env = "DO_SPACES_SECRET_KEY")]
    pub secret_key: String,

    /// Region override (derived from the endpoint when omitted)
    #[arg(long, env = "DO_SPACES_REGION")]
    pub region: Option<String>,

    // === Loading options ===
    /// Only load files with this extension (repeatable)
    #[arg(long = "ext")]
    pub required_exts: Vec<String>,

    /// Maximum number of files to load (0 = unlimited)
    #[arg(long, default_value = "0")]
    pub max_files: usize,

    /// Do not descend into sub-prefixes
    #[arg(long)]
    pub no_recursive: bool,

    /// Assign random UUIDs as document ids instead of file paths
    #[arg(long)]
    pub uuid_ids: bool,

    // === Output options ===
    /// Output format for documents on stdout
    #[arg(long, value_enum, default_value = "jsonl")]
    pub output_format: DocumentFormat,

    // === Logging options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

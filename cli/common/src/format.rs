//! Document output formatting for CLI binaries.

use clap::ValueEnum;
use ds_types::Document;
use std::io::Write;

/// Output format for loaded documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DocumentFormat {
    /// JSON Lines (one document per line)
    Jsonl,
    /// Pretty-printed JSON array
    Json,
}

/// Write documents to a sink in the requested format.
///
/// JSONL emits one compact JSON object per line; JSON emits a single
/// pretty-printed array. Logs go to stderr elsewhere, so the sink stays
/// machine-readable.
pub fn write_documents<W: Write>(
    out: &mut W,
    documents: &[Document],
    format: DocumentFormat,
) -> anyhow::Result<()> {
    match format {
        DocumentFormat::Jsonl => {
            for doc in documents {
                let line = serde_json::to_string(doc)?;
                writeln!(out, "{line}")?;
            }
        }
        DocumentFormat::Json => {
            let body = serde_json::to_string_pretty(documents)?;
            writeln!(out, "{body}")?;
        }
    }
    Ok(())
}

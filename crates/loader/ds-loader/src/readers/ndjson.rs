//! NDJSON reader.

use ds_error::{LoaderError, Result};
use ds_traits::{FileContext, FileReader};
use ds_types::Document;

/// Reads newline-delimited JSON into one document per record line.
///
/// Empty and whitespace-only lines are skipped. Each line must be a
/// complete JSON value; the document text is the line as stored and the
/// 1-based line number lands in the metadata. Also handles plain `.json`
/// files, which are a single record on one (possibly pretty-printed)
/// body - in that case the whole body parses as one value.
#[derive(Debug, Clone, Copy, Default)]
pub struct NdjsonReader;

impl FileReader for NdjsonReader {
    fn parse(&self, data: &[u8], ctx: &FileContext) -> Result<Vec<Document>> {
        let text = std::str::from_utf8(data).map_err(|e| {
            LoaderError::Parse(format!("{} is not valid UTF-8: {}", ctx.path, e))
        })?;

        let mut documents = Vec::new();
        for (idx, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }

            if let Err(e) = serde_json::from_str::<serde_json::Value>(trimmed) {
                // Not one-value-per-line; try the whole body as a single
                // JSON document (pretty-printed .json files).
                if documents.is_empty() {
                    return parse_whole(text, ctx);
                }
                return Err(LoaderError::Parse(format!(
                    "Invalid JSON on line {} of {}: {}",
                    idx + 1,
                    ctx.path,
                    e
                ))
                .into());
            }

            documents
                .push(Document::from_text(trimmed).with_metadata("line_number", idx + 1));
        }

        Ok(documents)
    }

    fn description(&self) -> String {
        "ndjson".to_string()
    }
}

fn parse_whole(text: &str, ctx: &FileContext) -> Result<Vec<Document>> {
    serde_json::from_str::<serde_json::Value>(text)
        .map_err(|e| LoaderError::Parse(format!("Invalid JSON in {}: {}", ctx.path, e)).into())
        .map(|_| vec![Document::from_text(text.trim())])
}

//! CSV reader.

use ds_error::{LoaderError, Result};
use ds_traits::{FileContext, FileReader};
use ds_types::Document;

/// Reads a delimited file into one document.
///
/// The header row is kept as the first line and every record is rendered
/// as comma-joined fields, so downstream chunkers see a compact textual
/// table. Row count lands in the document metadata.
#[derive(Debug, Clone, Copy)]
pub struct CsvReader {
    delimiter: u8,
}

impl CsvReader {
    /// Comma-delimited (.csv).
    pub fn comma() -> Self {
        Self { delimiter: b',' }
    }

    /// Tab-delimited (.tsv).
    pub fn tab() -> Self {
        Self { delimiter: b'\t' }
    }
}

impl FileReader for CsvReader {
    fn parse(&self, data: &[u8], ctx: &FileContext) -> Result<Vec<Document>> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(data);

        let headers: Vec<String> = reader
            .headers()
            .map_err(|e| {
                LoaderError::Parse(format!("Failed to parse headers in {}: {}", ctx.path, e))
            })?
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut lines = vec![headers.join(", ")];
        let mut rows = 0usize;
        for record in reader.records() {
            let record = record.map_err(|e| {
                LoaderError::Parse(format!("Failed to parse record in {}: {}", ctx.path, e))
            })?;
            lines.push(record.iter().collect::<Vec<_>>().join(", "));
            rows += 1;
        }

        Ok(vec![
            Document::from_text(lines.join("\n")).with_metadata("row_count", rows)
        ])
    }

    fn description(&self) -> String {
        match self.delimiter {
            b'\t' => "csv(tab)".to_string(),
            _ => "csv".to_string(),
        }
    }
}

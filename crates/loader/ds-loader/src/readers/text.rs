//! Plain-text reader.

use ds_error::{LoaderError, Result};
use ds_traits::{FileContext, FileReader};
use ds_types::Document;

/// Reads a file as one UTF-8 text document.
///
/// The default reader for txt/md/log-style extensions. Content must be
/// valid UTF-8; anything else fails as a parse error rather than being
/// silently lossy-decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextReader;

impl FileReader for TextReader {
    fn parse(&self, data: &[u8], ctx: &FileContext) -> Result<Vec<Document>> {
        let text = std::str::from_utf8(data).map_err(|e| {
            LoaderError::Parse(format!("{} is not valid UTF-8: {}", ctx.path, e))
        })?;
        Ok(vec![Document::from_text(text)])
    }

    fn description(&self) -> String {
        "text".to_string()
    }
}

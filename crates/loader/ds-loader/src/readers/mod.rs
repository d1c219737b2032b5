//! Built-in file readers.
//!
//! These cover the text-shaped formats the loader parses itself. Binary
//! formats (PDF, images, office documents) are out of scope; register a
//! custom [`FileReader`](ds_traits::FileReader) for those.

mod csv;
mod ndjson;
mod text;

pub use csv::CsvReader;
pub use ndjson::NdjsonReader;
pub use text::TextReader;

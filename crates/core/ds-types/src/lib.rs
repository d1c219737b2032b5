//! Shared value types for docstream.
//!
//! This crate holds the types that cross crate boundaries:
//! - [`Document`] - A parsed document with text, metadata, and identifier
//! - [`ObjectEntry`] - A single object from a storage listing

pub mod document;
pub mod entry;

pub use document::{Document, Metadata};
pub use entry::ObjectEntry;

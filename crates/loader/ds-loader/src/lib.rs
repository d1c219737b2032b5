//! ds-loader - generic directory loading for docstream.
//!
//! This crate converts files reachable through an [`ObjectFs`] into
//! [`Document`]s. It owns:
//!
//! - Traversal of a directory root (or an explicit file list)
//! - Required-extension filtering and the file-count limit
//! - Extension-to-reader dispatch with built-in text-shaped readers
//! - File metadata attachment and identifier assignment
//!
//! Connectors stay thin: they resolve a target and hand this crate a
//! freshly built storage facade.
//!
//! # Example
//!
//! ```ignore
//! use ds_loader::{DirectoryLoader, LoaderConfig, ReaderRegistry};
//! use ds_traits::MemoryFs;
//!
//! let fs = MemoryFs::new();
//! fs.insert("docs/a.txt", "hello");
//!
//! let config = LoaderConfig::directory("docs");
//! let loader = DirectoryLoader::new(fs, config, ReaderRegistry::defaults());
//!
//! let documents = loader.load().await?;
//! assert_eq!(documents.len(), 1);
//! ```
//!
//! [`ObjectFs`]: ds_traits::ObjectFs
//! [`Document`]: ds_types::Document

pub mod config;
pub mod loader;
pub mod readers;
pub mod registry;
pub mod stats;

pub use config::{LoaderConfig, LoaderInput};
pub use loader::{DirectoryLoader, MetadataFn};
pub use readers::{CsvReader, NdjsonReader, TextReader};
pub use registry::ReaderRegistry;
pub use stats::LoadStats;

//! Shared utilities for docstream CLI binaries.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{write_documents, DocumentFormat};
pub use logging::init_logging;

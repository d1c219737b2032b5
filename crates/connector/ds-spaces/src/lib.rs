//! ds-spaces - DigitalOcean Spaces connector for docstream.
//!
//! Bridges a Spaces (S3-compatible) bucket to the generic directory
//! loader. The connector holds connection configuration, builds a fresh
//! storage facade per operation, and exposes:
//!
//! - `exists` / `make_dirs` / `open` / `list_dir` - raw storage
//!   operations passed through to the facade
//! - `load` - resolves a single key or a prefix root, hands the facade
//!   to [`DirectoryLoader`](ds_loader::DirectoryLoader), and prefixes
//!   every returned document id with `do_spaces_`
//!
//! # Example
//!
//! ```ignore
//! use ds_spaces::{SpacesConfig, SpacesConnector};
//!
//! let config = SpacesConfig::new(
//!     "docs-bucket",
//!     "DO_KEY_ID",
//!     "DO_SECRET",
//!     "https://nyc3.digitaloceanspaces.com",
//! )
//! .with_prefix("reports/");
//!
//! let connector = SpacesConnector::new(config);
//! let documents = connector.load().await?;
//! for doc in &documents {
//!     println!("{} ({} chars)", doc.id, doc.text.len());
//! }
//! ```

pub mod client;
pub mod config;
pub mod connector;
pub mod fs;

pub use client::create_client;
pub use config::SpacesConfig;
pub use connector::{SpacesConnector, ID_PREFIX};
pub use fs::SpacesFs;

//! Common utilities for integration tests.
//!
//! This module provides shared test infrastructure for S3-compatible
//! endpoint testing, including client setup and test data generation.

pub mod spaces;

pub use spaces::{
    generate_test_csv, generate_test_ndjson, SpacesTestContext, TEST_KEY_ID, TEST_SECRET_KEY,
};

//! Integration tests for docstream.
//!
//! These tests require an S3-compatible endpoint (LocalStack or MinIO) to
//! be running. They are marked as `#[ignore]` by default to avoid running
//! them in CI without proper setup.
//!
//! ## Running Integration Tests
//!
//! 1. Start LocalStack:
//!    ```bash
//!    docker run --rm -p 4566:4566 localstack/localstack
//!    ```
//!
//! 2. Run the integration tests:
//!    ```bash
//!    SPACES_TEST_ENDPOINT=http://localhost:4566 cargo test -p integration-tests -- --ignored
//!    ```

mod common;
mod connector_test;
mod loader_test;

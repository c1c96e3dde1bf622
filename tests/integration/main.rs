//! Integration tests for bucketprobe.
//!
//! Most of these tests require an S3-compatible endpoint (LocalStack,
//! MinIO, RustFS) to be running. They are marked as `#[ignore]` by
//! default to avoid running them in CI without proper setup.
//!
//! ## Running Integration Tests
//!
//! 1. Start LocalStack (or any S3-compatible service):
//!    ```bash
//!    docker run --rm -p 4566:4566 localstack/localstack
//!    ```
//!
//! 2. Run the integration tests:
//!    ```bash
//!    LOCALSTACK_ENDPOINT=http://localhost:4566 cargo test -p integration-tests -- --ignored
//!    ```

mod common;
mod smoke_test;

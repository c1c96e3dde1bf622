//! Common utilities for integration tests.
//!
//! This module provides shared test infrastructure for testing against
//! a local S3-compatible endpoint: client setup, bucket provisioning,
//! and local upload fixtures.


pub use localstack::{LocalStackTestContext, write_upload_fixture};

//! S3 client configuration and construction.
//!
//! This module builds the `aws-sdk-s3` client the checks run against:
//! - Custom endpoint support for S3-compatible services (MinIO, RustFS,
//!   LocalStack), with forced path-style addressing
//! - Explicit static credentials or a named AWS profile

mod client;

pub use client::{S3Config, create_s3_client};

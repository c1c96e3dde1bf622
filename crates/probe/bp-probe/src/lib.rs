//! bp-probe - S3-compatible endpoint smoke testing for bucketprobe.
//!
//! This crate exercises an S3-compatible endpoint with three sequential
//! checks and reports what it observed:
//!
//! - List all buckets visible to the credentials
//! - Upload one local file as an object (create or overwrite)
//! - List objects in the target bucket, optionally verifying the
//!   uploaded key appears in the listing
//!
//! Each call is issued exactly once; there are no retries and no
//! concurrency. Request signing (SigV4), HTTP dispatch, and response
//! parsing are delegated to `aws-sdk-s3`.
//!
//! # Example
//!
//! ```ignore
//! use bp_probe::{S3Config, SmokeConfig, SmokeRunner, create_s3_client};
//!
//! // Configure endpoint access
//! let s3_config = S3Config::new()
//!     .with_endpoint("http://localhost:9090")
//!     .with_region("cn-north-1")
//!     .with_credentials("rustfs", "rustfs_secret");
//!
//! let client = create_s3_client(&s3_config).await?;
//!
//! // Configure and run the smoke test
//! let config = SmokeConfig::new("geonexus-assets")
//!     .with_key("test_file.txt")
//!     .with_source("test_upload.txt");
//!
//! let report = SmokeRunner::new(client, config).run().await?;
//! eprintln!("Saw {} buckets", report.buckets.len());
//! ```

pub mod checks;
pub mod s3;
pub mod smoke;

pub use checks::{BucketSummary, ObjectSummary, UploadSummary};
pub use s3::{S3Config, create_s3_client};
pub use smoke::{SmokeConfig, SmokeReport, SmokeRunner};

//! The sequential smoke-test runner.
//!
//! Runs the three checks strictly in order and stops at the first
//! failure: if the upload fails, object listing is never attempted.
//! Each call is a single attempt; there are no retries.

use std::path::{Path, PathBuf};
use std::time::Instant;

use aws_sdk_s3::Client;
use bp_error::Result;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::checks::{self, BucketSummary, ObjectSummary, UploadSummary};

/// Configuration for a smoke-test run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmokeConfig {
    /// Target bucket for upload and object listing
    pub bucket: String,

    /// Key to create or overwrite
    pub key: String,

    /// Local file to upload
    pub source: PathBuf,

    /// Optional prefix for the object listing
    pub prefix: Option<String>,

    /// Whether to verify the uploaded key appears in the listing
    pub verify: bool,
}

impl SmokeConfig {
    /// Create a configuration for the given bucket with default key and
    /// source file names.
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: "test_file.txt".to_string(),
            source: PathBuf::from("test_upload.txt"),
            prefix: None,
            verify: true,
        }
    }

    /// Set the object key to upload to.
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    /// Set the local file to upload.
    pub fn with_source(mut self, source: impl Into<PathBuf>) -> Self {
        self.source = source.into();
        self
    }

    /// Set the prefix for the object listing.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Enable or disable uploaded-key verification.
    pub fn with_verify(mut self, verify: bool) -> Self {
        self.verify = verify;
        self
    }
}

/// What a completed smoke-test run observed.
#[derive(Debug, Clone, Serialize)]
pub struct SmokeReport {
    /// Target bucket
    pub bucket: String,

    /// Buckets visible to the credentials
    pub buckets: Vec<BucketSummary>,

    /// Upload outcome
    pub upload: UploadSummary,

    /// Objects observed in the target bucket (empty when the bucket has
    /// no contents under the configured prefix)
    pub objects: Vec<ObjectSummary>,

    /// Whether the uploaded key appeared exactly once in the listing;
    /// `None` when verification was disabled
    pub verified: Option<bool>,

    /// Wall-clock duration of the whole run in milliseconds
    pub duration_ms: u64,
}

impl SmokeReport {
    /// Count listing entries for a key. Overwriting an existing object
    /// must leave exactly one entry, so verification checks for == 1.
    pub fn key_occurrences(&self, key: &str) -> usize {
        self.objects.iter().filter(|o| o.key == key).count()
    }
}

/// Sequential smoke-test runner.
pub struct SmokeRunner {
    client: Client,
    config: SmokeConfig,
}

impl SmokeRunner {
    /// Create a runner from a client and configuration.
    pub fn new(client: Client, config: SmokeConfig) -> Self {
        Self { client, config }
    }

    /// Run the three checks in order.
    ///
    /// Returns at the first failing step; steps after a failure are
    /// never attempted.
    pub async fn run(&self) -> Result<SmokeReport> {
        let started = Instant::now();
        let bucket = &self.config.bucket;

        info!("listing buckets");
        let buckets = checks::list_buckets(&self.client).await?;
        info!(count = buckets.len(), "bucket listing succeeded");

        info!(
            bucket = %bucket,
            key = %self.config.key,
            source = %self.config.source.display(),
            "uploading object"
        );
        let upload = checks::upload_object(
            &self.client,
            bucket,
            &self.config.key,
            Path::new(&self.config.source),
        )
        .await?;
        info!(bytes = upload.bytes_sent, "upload succeeded");

        info!(bucket = %bucket, prefix = ?self.config.prefix, "listing objects");
        let objects =
            checks::list_objects(&self.client, bucket, self.config.prefix.as_deref()).await?;
        info!(count = objects.len(), "object listing succeeded");

        let mut report = SmokeReport {
            bucket: bucket.clone(),
            buckets,
            upload,
            objects,
            verified: None,
            duration_ms: started.elapsed().as_millis() as u64,
        };

        if self.config.verify {
            report.verified = Some(report.key_occurrences(&self.config.key) == 1);
        }

        Ok(report)
    }
}

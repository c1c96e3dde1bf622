//! The three smoke-test operations.
//!
//! Each function issues its S3 call exactly once and flattens SDK
//! failures into a [`ProbeError::S3`] tagged with the step. The full
//! error chain is rendered into the message so the classifier can see
//! dispatch-level causes (connection refused, DNS, timeouts) as well as
//! service error codes.

use std::path::Path;

use aws_sdk_s3::Client;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use bp_error::{ProbeError, ProbeStep, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::debug;

/// A bucket observed by the ListBuckets check.
#[derive(Debug, Clone, Serialize)]
pub struct BucketSummary {
    /// Bucket name
    pub name: String,

    /// Creation timestamp, when the service reports one
    pub created: Option<DateTime<Utc>>,
}

/// An object observed by the ListObjects check.
#[derive(Debug, Clone, Serialize)]
pub struct ObjectSummary {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,

    /// Last modified timestamp
    pub last_modified: Option<DateTime<Utc>>,
}

/// The outcome of the upload check.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSummary {
    /// Target bucket
    pub bucket: String,

    /// Key the object was created or overwritten at
    pub key: String,

    /// Bytes sent, taken from the local file size
    pub bytes_sent: u64,
}

/// List all buckets visible to the configured credentials.
///
/// No side effects. Returns bucket names in the order the service
/// reported them.
pub async fn list_buckets(client: &Client) -> Result<Vec<BucketSummary>> {
    let resp = client
        .list_buckets()
        .send()
        .await
        .map_err(|e| ProbeError::s3(ProbeStep::ListBuckets, DisplayErrorContext(&e)))?;

    let buckets = resp
        .buckets
        .unwrap_or_default()
        .into_iter()
        .map(|b| BucketSummary {
            name: b.name.unwrap_or_default(),
            created: b
                .creation_date
                .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos())),
        })
        .collect();

    Ok(buckets)
}

/// Upload a local file as an object, creating or overwriting `key`.
///
/// The local file must exist and be a readable regular file; this is
/// checked before the request is built so a missing file fails as a
/// [`ProbeError::LocalFile`] rather than a mid-request error. The file
/// handle is scoped to the call and released on success and failure
/// alike.
pub async fn upload_object(
    client: &Client,
    bucket: &str,
    key: &str,
    path: &Path,
) -> Result<UploadSummary> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| ProbeError::local_file(path.display(), e.to_string()))?;

    if !metadata.is_file() {
        return Err(ProbeError::local_file(
            path.display(),
            "not a regular file",
        ));
    }

    debug!(bucket, key, bytes = metadata.len(), "uploading object");

    // ByteStream holds the file open only for the duration of the request
    let body = ByteStream::from_path(path)
        .await
        .map_err(|e| ProbeError::local_file(path.display(), e.to_string()))?;

    client
        .put_object()
        .bucket(bucket)
        .key(key)
        .content_type("application/octet-stream")
        .body(body)
        .send()
        .await
        .map_err(|e| ProbeError::s3(ProbeStep::UploadObject, DisplayErrorContext(&e)))?;

    Ok(UploadSummary {
        bucket: bucket.to_string(),
        key: key.to_string(),
        bytes_sent: metadata.len(),
    })
}

/// List objects in a bucket with optional prefix filtering.
///
/// Handles ListObjectsV2 pagination; a response with no contents yields
/// an empty vector. Directory markers (keys ending with `/`) are
/// filtered out.
pub async fn list_objects(
    client: &Client,
    bucket: &str,
    prefix: Option<&str>,
) -> Result<Vec<ObjectSummary>> {
    let mut objects = Vec::new();
    let mut continuation_token: Option<String> = None;

    loop {
        let mut req = client.list_objects_v2().bucket(bucket);

        if let Some(prefix) = prefix {
            req = req.prefix(prefix);
        }

        if let Some(ref token) = continuation_token {
            req = req.continuation_token(token);
        }

        let resp = req
            .send()
            .await
            .map_err(|e| ProbeError::s3(ProbeStep::ListObjects, DisplayErrorContext(&e)))?;

        if let Some(contents) = resp.contents {
            for obj in contents {
                let key = obj.key.unwrap_or_default();

                // Skip directory markers and empty keys
                if key.is_empty() || key.ends_with('/') {
                    continue;
                }

                let last_modified = obj
                    .last_modified
                    .and_then(|t| DateTime::from_timestamp(t.secs(), t.subsec_nanos()));

                objects.push(ObjectSummary {
                    key,
                    size: obj.size.unwrap_or(0) as u64,
                    last_modified,
                });
            }
        }

        // Check if there are more results
        if resp.is_truncated == Some(true) {
            continuation_token = resp.next_continuation_token;
            if continuation_token.is_none() {
                // No more pages
                break;
            }
        } else {
            break;
        }
    }

    Ok(objects)
}

//! Error types and classification for bucketprobe.
//!
//! This crate provides:
//! - [`ProbeError`] - Top-level error enum for all probe failures
//! - [`ProbeStep`] - The smoke-test step a failure occurred in
//! - [`ErrorKind`] for coarse classification of failures
//! - Classification logic used to print operator hints (never retries)

use thiserror::Error;

/// Top-level error type for bucketprobe.
#[derive(Error, Debug)]
pub enum ProbeError {
    /// Configuration errors (empty or inconsistent settings)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local file errors (missing, unreadable, not a regular file)
    #[error("Local file error for '{path}': {message}")]
    LocalFile { path: String, message: String },

    /// S3 call failures, tagged with the step that issued the call
    #[error("S3 error during {step}: {message}")]
    S3 { step: ProbeStep, message: String },

    /// Generic errors (wrapped anyhow)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProbeError {
    /// Build an S3 error from any displayable SDK error.
    pub fn s3(step: ProbeStep, message: impl std::fmt::Display) -> Self {
        Self::S3 {
            step,
            message: message.to_string(),
        }
    }

    /// Build a local file error.
    pub fn local_file(path: impl std::fmt::Display, message: impl Into<String>) -> Self {
        Self::LocalFile {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

/// The smoke-test step a failure occurred in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStep {
    /// Listing all buckets visible to the credentials
    ListBuckets,

    /// Uploading the local file to the target bucket
    UploadObject,

    /// Listing objects in the target bucket
    ListObjects,
}

impl std::fmt::Display for ProbeStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ListBuckets => write!(f, "ListBuckets"),
            Self::UploadObject => write!(f, "UploadObject"),
            Self::ListObjects => write!(f, "ListObjects"),
        }
    }
}

/// Coarse failure classification.
///
/// Used only to select an operator hint for the CLI. Retry and backoff
/// are out of scope for the harness, so classification never changes
/// control flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Endpoint unreachable: refused connections, DNS failures, timeouts
    Connectivity,

    /// Credentials rejected or insufficient
    Authentication,

    /// Bucket or key does not exist
    NotFound,

    /// The local file to upload is missing or unreadable
    LocalFile,

    /// Anything else
    Other,
}

impl ErrorKind {
    /// A one-line hint for the operator, where one exists.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::Connectivity => Some(
                "endpoint unreachable - check that the storage service is running \
                 and the --endpoint URL (scheme, host, port) is correct",
            ),
            Self::Authentication => Some(
                "credentials rejected - check the access key and secret key \
                 configured for this endpoint",
            ),
            Self::NotFound => {
                Some("bucket or key not found - check the bucket name and that it exists")
            }
            Self::LocalFile => {
                Some("create the upload file in the working directory before running")
            }
            Self::Other => None,
        }
    }
}

/// Classify an error for hint selection.
///
/// S3 failures are classified by matching the SDK's rendered error text,
/// since the step functions flatten SDK errors to strings.
pub fn classify_error(error: &ProbeError) -> ErrorKind {
    match error {
        ProbeError::Config(_) => ErrorKind::Other,
        ProbeError::LocalFile { .. } => ErrorKind::LocalFile,
        ProbeError::S3 { message, .. } => classify_message(message),
        ProbeError::Other(e) => classify_message(&e.to_string()),
    }
}

fn classify_message(message: &str) -> ErrorKind {
    let msg = message.to_lowercase();

    if msg.contains("connection refused")
        || msg.contains("connection reset")
        || msg.contains("dns error")
        || msg.contains("dispatch failure")
        || msg.contains("timeout")
        || msg.contains("error sending request")
    {
        return ErrorKind::Connectivity;
    }

    if msg.contains("accessdenied")
        || msg.contains("access denied")
        || msg.contains("invalidaccesskeyid")
        || msg.contains("signaturedoesnotmatch")
        || msg.contains("403")
        || msg.contains("401")
    {
        return ErrorKind::Authentication;
    }

    if msg.contains("nosuchbucket")
        || msg.contains("nosuchkey")
        || msg.contains("not found")
        || msg.contains("404")
    {
        return ErrorKind::NotFound;
    }

    ErrorKind::Other
}

/// Result type alias using ProbeError.
pub type Result<T> = std::result::Result<T, ProbeError>;

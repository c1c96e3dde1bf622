//! CLI argument definitions for bucketprobe.

use clap::{Parser, ValueEnum};

use bp_cli_common::LogLevel;

/// Smoke-test an S3-compatible endpoint.
///
/// Performs three sequential checks: list buckets, upload one local
/// file as an object, and list objects in the target bucket. The run
/// stops at the first failing check.
///
/// ## Examples
///
/// Against a local RustFS/MinIO instance:
///   bucketprobe -b geonexus-assets --endpoint http://localhost:9090 \
///       --access-key rustfs --secret-key rustfs_secret
///
/// With a custom key and source file:
///   bucketprobe -b my-bucket --key smoke/check.bin --file payload.bin
///
/// Machine-readable output:
///   bucketprobe -b my-bucket --output json
#[derive(Parser, Debug)]
#[command(name = "bucketprobe")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Endpoint Configuration ===
    /// Target bucket name
    #[arg(short, long, env = "BP_S3_BUCKET")]
    pub bucket: String,

    /// Custom S3 endpoint URL (for MinIO, RustFS, LocalStack)
    #[arg(long, env = "BP_S3_ENDPOINT")]
    pub endpoint: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "cn-north-1")]
    pub region: String,

    /// Access key ID
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: Option<String>,

    /// Secret access key
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
    pub secret_key: Option<String>,

    /// AWS profile name
    #[arg(long, env = "AWS_PROFILE")]
    pub profile: Option<String>,

    /// Per-operation timeout in seconds
    #[arg(long, default_value = "30", value_parser = parse_positive_u64)]
    pub timeout: u64,

    // === Smoke-test Options ===
    /// Object key to create or overwrite
    #[arg(long, default_value = "test_file.txt")]
    pub key: String,

    /// Local file to upload
    #[arg(long, default_value = "test_upload.txt")]
    pub file: String,

    /// Prefix for the object listing
    #[arg(long)]
    pub prefix: Option<String>,

    /// Skip verifying that the uploaded key appears in the listing
    #[arg(long)]
    pub no_verify: bool,

    // === Output Options ===
    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub output: OutputFormat,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Report output format.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable lines
    Text,
    /// One pretty-printed JSON document
    Json,
}

/// Parse a positive u64 (>= 1).
fn parse_positive_u64(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value < 1 {
        return Err(format!("{} is not in 1..", value));
    }
    Ok(value)
}

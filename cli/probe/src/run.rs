//! Execution and report rendering for the bucketprobe CLI.

use anyhow::Result;
use bp_cli_common::{format_bytes, format_number};
use bp_probe::{S3Config, SmokeConfig, SmokeReport, SmokeRunner, create_s3_client};

use crate::args::{Cli, OutputFormat};

/// Execute the smoke test with the provided arguments.
pub async fn execute(args: &Cli) -> Result<SmokeReport> {
    // Build endpoint configuration
    let mut s3_config = S3Config::new()
        .with_region(&args.region)
        .with_timeout(args.timeout);

    if let Some(endpoint) = &args.endpoint {
        s3_config = s3_config.with_endpoint(endpoint);
    }

    if let (Some(access_key), Some(secret_key)) = (&args.access_key, &args.secret_key) {
        s3_config = s3_config.with_credentials(access_key, secret_key);
    }

    if let Some(profile) = &args.profile {
        s3_config = s3_config.with_profile(profile);
    }

    // Create S3 client
    let client = create_s3_client(&s3_config).await?;

    // Build smoke-test configuration
    let mut smoke_config = SmokeConfig::new(&args.bucket)
        .with_key(&args.key)
        .with_source(&args.file)
        .with_verify(!args.no_verify);

    if let Some(prefix) = &args.prefix {
        smoke_config = smoke_config.with_prefix(prefix);
    }

    let runner = SmokeRunner::new(client, smoke_config);
    let report = runner.run().await?;

    Ok(report)
}

/// Render the report to stdout.
pub fn render(report: &SmokeReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => render_text(report),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
    }
    Ok(())
}

fn render_text(report: &SmokeReport) {
    println!("Buckets ({}):", format_number(report.buckets.len() as u64));
    for bucket in &report.buckets {
        match &bucket.created {
            Some(created) => println!("  {}  (created {})", bucket.name, created.to_rfc3339()),
            None => println!("  {}", bucket.name),
        }
    }

    println!(
        "Uploaded s3://{}/{} ({})",
        report.upload.bucket,
        report.upload.key,
        format_bytes(report.upload.bytes_sent)
    );

    println!(
        "Objects in {} ({}):",
        report.bucket,
        format_number(report.objects.len() as u64)
    );
    for object in &report.objects {
        let modified = object
            .last_modified
            .map(|t| t.to_rfc3339())
            .unwrap_or_default();
        println!(
            "  {}  {}  {}",
            object.key,
            format_bytes(object.size),
            modified
        );
    }

    match report.verified {
        Some(true) => println!("Verification: uploaded key present in listing"),
        Some(false) => println!("Verification: uploaded key MISSING from listing"),
        None => {}
    }

    println!(
        "Completed in {:.2}s",
        report.duration_ms as f64 / 1000.0
    );
}

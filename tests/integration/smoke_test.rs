//! End-to-end smoke tests against a local S3-compatible endpoint.
//!
//! These tests verify the three checks and the sequential runner:
//! bucket listing, upload, object listing, and uploaded-key
//! verification.

use crate::common::{LocalStackTestContext, write_upload_fixture};
use bp_error::{ErrorKind, ProbeError, ProbeStep, classify_error};
use bp_probe::checks;
use bp_probe::{S3Config, SmokeConfig, SmokeRunner, create_s3_client};

async fn probe_client(ctx: &LocalStackTestContext) -> aws_sdk_s3::Client {
    let config = S3Config::new()
        .with_endpoint(&ctx.endpoint)
        .with_region(&ctx.region)
        .with_credentials("test", "test");

    create_s3_client(&config).await.unwrap()
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_smoke_run_happy_path() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bp-smoke-happy";
    ctx.create_bucket(bucket).await.unwrap();

    let content = "hello bucketprobe\n";
    let (_guard, source) = write_upload_fixture(content);

    let client = probe_client(&ctx).await;
    let config = SmokeConfig::new(bucket).with_source(&source);

    let report = SmokeRunner::new(client, config).run().await.unwrap();

    // All three steps completed and the upload is visible in the listing
    assert!(report.buckets.iter().any(|b| b.name == bucket));
    assert_eq!(report.upload.bytes_sent, content.len() as u64);
    assert_eq!(report.key_occurrences("test_file.txt"), 1);
    assert_eq!(report.verified, Some(true));

    // Cleanup
    ctx.delete_object(bucket, "test_file.txt").await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_missing_local_file_fails_at_upload() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bp-smoke-missing-file";
    ctx.create_bucket(bucket).await.unwrap();

    let client = probe_client(&ctx).await;

    // Bucket listing works against this endpoint...
    let buckets = checks::list_buckets(&client).await.unwrap();
    assert!(buckets.iter().any(|b| b.name == bucket));

    // ...but the run fails at the upload step with a local file error,
    // before object listing is ever attempted
    let config = SmokeConfig::new(bucket).with_source("does-not-exist-upload.txt");
    let err = SmokeRunner::new(client, config).run().await.unwrap_err();

    assert!(matches!(err, ProbeError::LocalFile { .. }));
    assert_eq!(classify_error(&err), ErrorKind::LocalFile);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_reupload_is_idempotent() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bp-smoke-idempotent";
    ctx.create_bucket(bucket).await.unwrap();

    let (_guard, source) = write_upload_fixture("same key, twice\n");
    let client = probe_client(&ctx).await;
    let config = SmokeConfig::new(bucket).with_source(&source);
    let runner = SmokeRunner::new(client, config);

    runner.run().await.unwrap();
    let report = runner.run().await.unwrap();

    // Overwriting the same key leaves exactly one listing entry
    assert_eq!(report.key_occurrences("test_file.txt"), 1);
    assert_eq!(report.verified, Some(true));

    ctx.delete_object(bucket, "test_file.txt").await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_listing_scoped_by_prefix() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bp-smoke-prefix";
    ctx.create_bucket(bucket).await.unwrap();
    ctx.seed_object(bucket, "other/unrelated.txt", "noise")
        .await
        .unwrap();

    let (_guard, source) = write_upload_fixture("scoped\n");
    let client = probe_client(&ctx).await;
    let config = SmokeConfig::new(bucket)
        .with_key("smoke/test_file.txt")
        .with_source(&source)
        .with_prefix("smoke/");

    let report = SmokeRunner::new(client, config).run().await.unwrap();

    assert!(report.objects.iter().all(|o| o.key.starts_with("smoke/")));
    assert_eq!(report.key_occurrences("smoke/test_file.txt"), 1);
    assert_eq!(report.verified, Some(true));

    ctx.delete_object(bucket, "smoke/test_file.txt").await.ok();
    ctx.delete_object(bucket, "other/unrelated.txt").await.ok();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_list_objects_empty_bucket() {
    let ctx = LocalStackTestContext::new().await;

    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "bp-smoke-empty";
    ctx.create_bucket(bucket).await.unwrap();

    let client = probe_client(&ctx).await;
    let objects = checks::list_objects(&client, bucket, None).await.unwrap();

    assert!(objects.is_empty());
}

#[tokio::test]
async fn test_unreachable_endpoint_fails_at_first_step() {
    // Nothing listens on port 1; the run must fail at ListBuckets and
    // classify as a connectivity problem. No LocalStack needed.
    let config = S3Config::new()
        .with_endpoint("http://127.0.0.1:1")
        .with_region("us-east-1")
        .with_credentials("test", "test")
        .with_timeout(5);

    let client = create_s3_client(&config).await.unwrap();
    let (_guard, source) = write_upload_fixture("never sent\n");

    let smoke = SmokeConfig::new("no-such-bucket").with_source(&source);
    let err = SmokeRunner::new(client, smoke).run().await.unwrap_err();

    match &err {
        ProbeError::S3 { step, .. } => assert_eq!(*step, ProbeStep::ListBuckets),
        other => panic!("expected S3 error, got: {other}"),
    }
    assert_eq!(classify_error(&err), ErrorKind::Connectivity);
}

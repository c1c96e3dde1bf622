//! bucketprobe CLI
//!
//! Smoke-tests an S3-compatible endpoint: list buckets, upload one
//! local file, list objects in the target bucket.

use bp_error::{ProbeError, classify_error};
use clap::Parser;

mod args;
mod run;

use args::Cli;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    // Initialize logging (to stderr, so stdout is clean for the report)
    bp_cli_common::init_logging(args.log_level)?;

    match run::execute(&args).await {
        Ok(report) => {
            run::render(&report, args.output)?;

            // Verification failure is a failed probe even though every
            // call succeeded
            if report.verified == Some(false) {
                eprintln!(
                    "uploaded key '{}' not found in the object listing",
                    args.key
                );
                std::process::exit(2);
            }

            Ok(())
        }
        Err(err) => {
            // Exactly one error line on stdout, whatever the cause
            println!("Error: {err}");

            // Operator hint on stderr, when the failure classifies
            if let Some(kind) = err.downcast_ref::<ProbeError>().map(classify_error)
                && let Some(hint) = kind.hint()
            {
                eprintln!("hint: {hint}");
            }

            std::process::exit(1);
        }
    }
}

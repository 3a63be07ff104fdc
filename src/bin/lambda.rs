//! AWS Lambda entry point for fara-watcher
//!
//! Deploy with `cargo lambda build --release --features lambda`.
//! Intended to run on a daily cron trigger.
//!
//! ## Environment Variables
//!
//! - `REGISTRANT_ID`: FARA registration number to watch
//! - `FARA_API_BASE`: Filing API base URL
//! - `S3_BUCKET`: Archive bucket name
//! - `AWS_REGION`: Region for S3 and SES
//! - `SES_SENDER`: Verified sender identity
//! - `EMAIL_RECIPIENTS`: Comma-separated recipient list
//! - `RUST_LOG`: Log level (e.g., `info`, `debug`)

use lambda_runtime::{Error as LambdaError, service_fn};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fara_watcher::lambda::handler;

/// Main entry point for the AWS Lambda function.
#[tokio::main]
async fn main() -> Result<(), LambdaError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().json())
        .init();

    info!("fara-watcher Lambda starting...");
    lambda_runtime::run(service_fn(handler)).await
}

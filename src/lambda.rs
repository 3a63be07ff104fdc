// src/lambda.rs

//! AWS Lambda handler for the watcher.
//!
//! The handler runs one reconciliation pass per invocation:
//! 1. Fetch the registrant's filing list from the FARA API
//! 2. Snapshot the archive bucket inventory
//! 3. Archive and announce every new filing
//!
//! Configuration comes from environment variables (see [`Config::from_env`]).
//! A run-fatal error is returned as an invocation error so the scheduler
//! sees the failure.

use lambda_runtime::{Error as LambdaError, LambdaEvent};
use serde::Serialize;
use serde_json::Value;
use tracing::{info, instrument};

use crate::config::Config;
use crate::pipeline::run_once;

/// Lambda response payload.
#[derive(Debug, Serialize)]
pub struct WatchResponse {
    /// Human-readable run summary
    pub message: String,
}

/// Main Lambda handler function.
///
/// The event payload is opaque; cron triggers carry nothing the run needs.
#[instrument(skip(event))]
pub async fn handler(event: LambdaEvent<Value>) -> std::result::Result<WatchResponse, LambdaError> {
    info!("Handling event: {:?}", event.payload);

    let config = Config::from_env();
    config.validate()?;

    let summary = run_once(&config).await?;

    info!("Watch complete: {} new document(s)", summary.new_count);
    Ok(WatchResponse {
        message: format!("Count new docs: {}", summary.new_count),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_summary_message() {
        let response = WatchResponse {
            message: "Count new docs: 2".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "Count new docs: 2" }));
    }
}

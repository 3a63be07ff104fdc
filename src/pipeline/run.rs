// src/pipeline/run.rs

//! Full reconciliation pass: fetch filings, list the archive, compute the
//! delta, then archive and announce each new filing.

use chrono::{Local, NaiveDate};
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::models::NotificationMessage;
use crate::pipeline::delta::compute_new;
use crate::services::{ArchiveStore, FaraClient, FilingSource, Notifier, S3Archive, SesNotifier};

/// Summary of one watch run; the sole observable success output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WatchSummary {
    /// Number of new filings archived and announced in this run
    pub new_count: usize,
}

/// Run one reconciliation pass with today's date as the recency threshold.
pub async fn run_watch(
    config: &Config,
    source: &dyn FilingSource,
    archive: &dyn ArchiveStore,
    notifier: &dyn Notifier,
) -> Result<WatchSummary> {
    run_watch_at(config, source, archive, notifier, Local::now().date_naive()).await
}

/// Run one reconciliation pass against an explicit reference date.
///
/// Sequencing: list filings, snapshot the archive inventory, compute the new
/// set, then per new filing: download, store, notify every recipient. Filing
/// list or inventory failures abort the run. A download or store failure
/// skips that filing with a warning and continues; because its key never
/// enters the archive, the next run retries it. Delivery failures are logged
/// per recipient and never abort anything.
pub async fn run_watch_at(
    config: &Config,
    source: &dyn FilingSource,
    archive: &dyn ArchiveStore,
    notifier: &dyn Notifier,
    reference_date: NaiveDate,
) -> Result<WatchSummary> {
    let filings = source.list_filings(config.watch.registrant_id).await?;
    let archive_keys = archive.list_keys().await?;

    let new_filings = compute_new(&filings, &archive_keys, reference_date);
    if new_filings.is_empty() {
        info!(
            "No new filings for registrant {} ({} listed, {} archived)",
            config.watch.registrant_id,
            filings.len(),
            archive_keys.len()
        );
        return Ok(WatchSummary { new_count: 0 });
    }

    info!("{} new filing(s) to archive and announce", new_filings.len());

    let mut new_count = 0;
    for filing in &new_filings {
        let key = filing.derived_key();

        let body = match source.fetch_document(&filing.url).await {
            Ok(body) => body,
            Err(e) => {
                warn!("Skipping filing {}: {}", key, e);
                continue;
            }
        };

        let copy = match archive.store(&key, body).await {
            Ok(copy) => copy,
            Err(e) => {
                warn!("Skipping filing {}: {}", key, e);
                continue;
            }
        };

        let message = NotificationMessage::render(filing, &copy.url);
        for recipient in &config.email.recipients {
            // Best-effort broadcast: a rejected send never blocks the rest.
            if let Err(e) = notifier.send(recipient, &message).await {
                warn!("Delivery to {} failed: {}", recipient, e);
            }
        }

        new_count += 1;
    }

    Ok(WatchSummary { new_count })
}

/// Build the real collaborators from configuration and run one pass.
///
/// Shared by the CLI and Lambda entry points.
pub async fn run_once(config: &Config) -> Result<WatchSummary> {
    let aws_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(aws_config::Region::new(config.archive.region.clone()))
        .load()
        .await;

    let source = FaraClient::new(&config.watch)?;
    let archive = S3Archive::new(
        aws_sdk_s3::Client::new(&aws_config),
        &config.archive.bucket,
    );
    let notifier = SesNotifier::new(aws_sdk_ses::Client::new(&aws_config), &config.email.sender);

    run_watch(config, &source, &archive, &notifier).await
}

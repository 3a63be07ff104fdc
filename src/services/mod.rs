//! Service layer for the watcher application.
//!
//! External collaborators behind async traits so the orchestrator can run
//! against in-memory fakes in tests:
//! - Filing API access (`FaraClient`)
//! - Archive bucket access (`S3Archive`)
//! - Email dispatch (`SesNotifier`)

mod fara;
mod s3;
mod ses;

use std::collections::HashSet;

use async_trait::async_trait;

pub use fara::FaraClient;
pub use s3::S3Archive;
pub use ses::SesNotifier;

use crate::error::Result;
use crate::models::{ArchivedCopy, Filing, NotificationMessage};

/// Source of filed documents and their content.
#[async_trait]
pub trait FilingSource: Send + Sync {
    /// Fetch the current list of supplemental statements for a registrant.
    async fn list_filings(&self, registrant_id: u64) -> Result<Vec<Filing>>;

    /// Download the document bytes at an official URL.
    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>>;
}

/// Durable archive of previously seen filings.
#[async_trait]
pub trait ArchiveStore: Send + Sync {
    /// Enumerate every key currently in the archive.
    ///
    /// The snapshot is re-derived on every run; it is the system's only
    /// persistent-state substitute.
    async fn list_keys(&self) -> Result<HashSet<String>>;

    /// Store a document under a key with public-read visibility.
    async fn store(&self, key: &str, body: Vec<u8>) -> Result<ArchivedCopy>;
}

/// Email dispatch for one sender identity.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Send a rendered message to a single recipient.
    async fn send(&self, recipient: &str, message: &NotificationMessage) -> Result<()>;
}

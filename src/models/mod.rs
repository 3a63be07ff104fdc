// src/models/mod.rs

//! Domain models for the watcher application.

mod filing;
mod message;

// Re-export all public types
pub use filing::{Filing, RegDocsResponse};
pub use message::{ArchivedCopy, NotificationMessage};

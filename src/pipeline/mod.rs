//! Pipeline entry points for watcher operations.
//!
//! - `delta`: pure new-filing computation (the correctness-critical core)
//! - `run`: one full reconciliation pass over the remote list and the archive

pub mod delta;
pub mod run;

pub use delta::compute_new;
pub use run::{WatchSummary, run_once, run_watch, run_watch_at};

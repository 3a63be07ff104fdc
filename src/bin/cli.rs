//! fara-watcher CLI
//!
//! Local one-shot execution entry point. For AWS Lambda, use
//! `fara-watcher-lambda`.

use std::path::PathBuf;

use clap::Parser;
use fara_watcher::{config::Config, error::Result, pipeline};

/// fara-watcher - FARA Supplemental Statement watcher
#[derive(Parser, Debug)]
#[command(
    name = "fara-watcher",
    version,
    about = "Archives and announces new FARA Supplemental Statements"
)]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "data/config.toml")]
    config: PathBuf,

    /// Override the watched registrant id
    #[arg(long)]
    registrant: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("fara-watcher starting...");

    let mut config = Config::load_or_default(&cli.config);
    if let Some(registrant) = cli.registrant {
        config.watch.registrant_id = registrant;
    }
    config.validate()?;

    log::info!(
        "Watching registrant {} (bucket: {}, {} recipients)",
        config.watch.registrant_id,
        config.archive.bucket,
        config.email.recipients.len()
    );

    let summary = pipeline::run_once(&config).await?;

    log::info!("Count new docs: {}", summary.new_count);
    log::info!("Done!");

    Ok(())
}

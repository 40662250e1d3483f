//! Contact Assistant - Main entry point
//!
//! This is the main executable for the contact assistant, an interactive
//! command-line bot that manages a persisted personal address book.

use anyhow::Result;
use contact_assistant::repositories::JsonFileRepository;
use contact_assistant::{repl, Config};
use std::io;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load configuration first so its log level can seed the filter
    let config = match Config::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    // Initialize logging (stderr only to keep stdout for the session transcript)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    info!(
        "Starting contact assistant with book at {}",
        config.book_path.display()
    );

    let repository = JsonFileRepository::new(&config.book_path);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if let Err(e) = repl::run(&repository, &config, stdin.lock(), stdout.lock()) {
        error!("session failed: {}", e);
        return Err(e);
    }

    info!("Contact assistant shutdown complete");
    Ok(())
}

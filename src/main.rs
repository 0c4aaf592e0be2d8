//! # Habit Tracker Main Entry Point
//!
//! Initializes logging, loads configuration, opens the habit store, and
//! dispatches the requested CLI command (or runs the reminder daemon).

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use habit_tracker::cli::{self, Cli};
use habit_tracker::config::Config;
use habit_tracker::store::HabitStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "habit_tracker=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Habit Tracker v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - Data file: {}, Reminder hour: {}",
        config.data_file, config.reminder_hour
    );

    let store = Arc::new(HabitStore::new(
        &config.data_file,
        Duration::from_secs(config.cache_ttl_secs),
    ));

    let command = Cli::parse();
    cli::run(command, store, &config).await
}

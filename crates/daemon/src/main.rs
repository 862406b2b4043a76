// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Freightwatch Daemon (fwd)
//!
//! Background process that scans shipment records for approaching date
//! fields and fires desktop reminders, exactly once per occurrence.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod lifecycle;

use std::path::PathBuf;
use std::sync::Arc;

use tokio::signal::unix::{signal, SignalKind};
use tracing::{error, info};

use crate::lifecycle::{acquire_lock, Config, LifecycleError};
use fw_adapters::{JsonRecordSource, JsonSettingsSource, OsascriptNotifier};
use fw_core::SystemClock;
use fw_engine::{Dispatcher, EngineConfig, Scheduler};

/// Daemon scheduler with concrete adapter types
type FwdScheduler =
    Scheduler<JsonSettingsSource, JsonRecordSource, OsascriptNotifier, SystemClock>;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse arguments
    let args: Vec<String> = std::env::args().collect();
    let data_dir = if args.len() > 1 {
        PathBuf::from(&args[1])
    } else {
        Config::default_data_dir()?
    };

    // Load configuration
    let config = Config::for_data_dir(&data_dir)?;

    // Set up logging
    let _log_guard = setup_logging(&config)?;

    info!("Starting fwd with data dir: {}", config.data_dir.display());

    // Single-instance lock, held for the process lifetime
    let _lock_file = match acquire_lock(&config) {
        Ok(f) => f,
        Err(e) => {
            error!("Failed to start daemon: {}", e);
            return Err(e.into());
        }
    };

    let scheduler = build_scheduler(&config);
    scheduler.start();

    // Set up signal handlers
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    info!(
        fire_hour = config.fire_hour,
        tick_secs = config.tick_interval.as_secs(),
        "Daemon ready"
    );

    // Signal ready for parent process (e.g. launchd, host app waiting for startup)
    println!("READY");

    tokio::select! {
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down...");
        }
    }

    scheduler.stop();
    info!("Daemon stopped");
    Ok(())
}

fn build_scheduler(config: &Config) -> FwdScheduler {
    let engine_config = EngineConfig::new(&config.ledger_path)
        .with_fire_hour(config.fire_hour)
        .with_tick_interval(config.tick_interval);

    let dispatcher = Dispatcher::new(
        JsonSettingsSource::new(&config.settings_path),
        JsonRecordSource::new(&config.records_dir),
        OsascriptNotifier::new(),
        SystemClock,
        engine_config,
    );
    Scheduler::new(Arc::new(dispatcher))
}

fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, LifecycleError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    // Create log directory if needed
    if let Some(parent) = config.log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Set up file appender
    let file_appender = tracing_appender::rolling::never(
        config.log_path.parent().ok_or(LifecycleError::NoDataDir)?,
        config
            .log_path
            .file_name()
            .ok_or(LifecycleError::NoDataDir)?,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Set up subscriber with env filter
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    Ok(guard)
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: paths, overrides, single-instance lock.

use fs2::FileExt;
use fw_engine::{DEFAULT_FIRE_HOUR, DEFAULT_TICK_INTERVAL};
use serde::Deserialize;
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid override file: {0}")]
    Overrides(#[from] toml::de::Error),
    #[error("firing hour {0} is out of range (0-23)")]
    InvalidFireHour(u32),
    #[error("another fwd instance holds the lock at {0}")]
    AlreadyRunning(PathBuf),
    #[error("no usable data directory")]
    NoDataDir,
}

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding all engine state and collaborator documents
    pub data_dir: PathBuf,
    /// Alert settings document written by the host application
    pub settings_path: PathBuf,
    /// Directory of per-kind record snapshot documents
    pub records_dir: PathBuf,
    /// Sent-notification ledger document
    pub ledger_path: PathBuf,
    /// Daemon log file
    pub log_path: PathBuf,
    /// Lock/PID file
    pub lock_path: PathBuf,
    /// Local hour at which reminders fire
    pub fire_hour: u32,
    /// Scan timer period
    pub tick_interval: Duration,
}

/// Optional operator overrides, read from `freightwatch.toml` in the
/// data directory
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Overrides {
    fire_hour: Option<u32>,
    #[serde(with = "humantime_serde::option")]
    tick_interval: Option<Duration>,
}

impl Config {
    /// Create config rooted at a data directory, applying overrides
    pub fn for_data_dir(data_dir: &Path) -> Result<Self, LifecycleError> {
        fs::create_dir_all(data_dir)?;
        let data_dir = data_dir.canonicalize()?;

        let overrides = read_overrides(&data_dir.join("freightwatch.toml"))?;
        let fire_hour = overrides.fire_hour.unwrap_or(DEFAULT_FIRE_HOUR);
        if fire_hour > 23 {
            return Err(LifecycleError::InvalidFireHour(fire_hour));
        }

        Ok(Self {
            settings_path: data_dir.join("alerts.json"),
            records_dir: data_dir.join("records"),
            ledger_path: data_dir.join("ledger.json"),
            log_path: data_dir.join("fwd.log"),
            lock_path: data_dir.join("fwd.pid"),
            fire_hour,
            tick_interval: overrides.tick_interval.unwrap_or(DEFAULT_TICK_INTERVAL),
            data_dir,
        })
    }

    /// Default data directory under the user's local data dir
    pub fn default_data_dir() -> Result<PathBuf, LifecycleError> {
        dirs::data_local_dir()
            .map(|dir| dir.join("freightwatch"))
            .ok_or(LifecycleError::NoDataDir)
    }
}

fn read_overrides(path: &Path) -> Result<Overrides, LifecycleError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Overrides::default()),
        Err(e) => return Err(e.into()),
    };
    Ok(toml::from_str(&raw)?)
}

/// Take the single-instance lock, writing this process's PID
///
/// The returned file must be kept alive for the daemon's lifetime; the
/// advisory lock releases on drop.
pub fn acquire_lock(config: &Config) -> Result<File, LifecycleError> {
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(false)
        .open(&config.lock_path)?;

    if file.try_lock_exclusive().is_err() {
        return Err(LifecycleError::AlreadyRunning(config.lock_path.clone()));
    }

    file.set_len(0)?;
    writeln!(file, "{}", std::process::id())?;
    Ok(file)
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;

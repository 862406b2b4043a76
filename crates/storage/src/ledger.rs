// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Durable ledger of already-fired notifications
//!
//! The ledger is the only state the engine owns. It is a single JSON
//! document holding every dedup key fired within the retention window,
//! loaded at the start of a scan and fully rewritten on each mutation.
//! Entries older than the retention window are dropped on load, and a
//! pruned ledger is re-persisted immediately so storage growth stays
//! bounded without a separate compaction pass.

use chrono::{DateTime, Duration, Utc};
use fw_core::{DedupKey, SentNotification};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{self, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How long a fired key keeps suppressing duplicates
pub const RETENTION_DAYS: i64 = 30;

/// Errors that can occur in ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// The set of notifications already fired, backed by a JSON document
pub struct SentLedger {
    path: PathBuf,
    entries: Vec<SentNotification>,
    keys: HashSet<DedupKey>,
}

impl SentLedger {
    /// Load the ledger, dropping entries older than the retention window
    ///
    /// A missing file is an empty ledger. If compaction removed anything
    /// the pruned document is persisted before returning.
    pub fn load_compacted(path: impl Into<PathBuf>, now: DateTime<Utc>) -> Result<Self, LedgerError> {
        let path = path.into();
        let entries = read_entries(&path)?;
        let loaded = entries.len();

        let cutoff = now - Duration::days(RETENTION_DAYS);
        let entries: Vec<SentNotification> = entries
            .into_iter()
            .filter(|entry| entry.sent_at >= cutoff)
            .collect();
        let keys = entries.iter().map(SentNotification::key).collect();

        let ledger = Self {
            path,
            entries,
            keys,
        };
        if ledger.entries.len() < loaded {
            ledger.persist()?;
        }
        Ok(ledger)
    }

    /// Has this key already been fired?
    pub fn contains(&self, key: &DedupKey) -> bool {
        self.keys.contains(key)
    }

    /// Record a fired key and persist the full document
    ///
    /// Persistence failures propagate so the caller can abort the scan
    /// cycle; a retried cycle may then re-notify, which is the accepted
    /// duplicate-but-safe degraded mode.
    pub fn record(&mut self, key: DedupKey, now: DateTime<Utc>) -> Result<(), LedgerError> {
        if !self.keys.insert(key.clone()) {
            return Ok(());
        }
        self.entries.push(SentNotification::new(key, now));
        self.persist()
    }

    fn persist(&self) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, &self.entries)?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn entries(&self) -> &[SentNotification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn read_entries(path: &Path) -> Result<Vec<SentNotification>, LedgerError> {
    let file = match File::open(path) {
        Ok(f) => f,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };
    Ok(serde_json::from_reader(BufReader::new(file))?)
}

#[cfg(test)]
#[path = "ledger_tests.rs"]
mod tests;

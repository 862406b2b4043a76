// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-file-backed record source
//!
//! Reads `<dir>/<kind>.json` snapshot documents, one list per record
//! kind. Stands in for the host application's document store; the host
//! keeps these snapshots current.

use super::{RecordSource, SourceError};
use async_trait::async_trait;
use fw_core::{MonitoredRecord, RecordKind};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Record source reading per-kind JSON snapshot files
#[derive(Clone, Debug)]
pub struct JsonRecordSource {
    dir: PathBuf,
}

impl JsonRecordSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, kind: RecordKind) -> PathBuf {
        self.dir.join(format!("{}.json", kind))
    }
}

#[async_trait]
impl RecordSource for JsonRecordSource {
    async fn load(&self, kind: RecordKind) -> Result<Vec<MonitoredRecord>, SourceError> {
        let file = match File::open(self.path_for(kind)) {
            Ok(f) => f,
            // No snapshot yet means an empty collection, not a failure
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        let records: Vec<MonitoredRecord> = serde_json::from_reader(BufReader::new(file))?;
        tracing::debug!(kind = %kind, count = records.len(), "loaded record snapshot");
        Ok(records)
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake record source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{RecordSource, SourceError};
use async_trait::async_trait;
use fw_core::{MonitoredRecord, RecordKind};
use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex};

/// Fake record source with per-kind records and failure injection
#[derive(Clone, Default)]
pub struct FakeRecordSource {
    records: Arc<Mutex<BTreeMap<RecordKind, Vec<MonitoredRecord>>>>,
    failing: Arc<Mutex<BTreeSet<RecordKind>>>,
}

impl FakeRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the records of one kind
    pub fn put(&self, kind: RecordKind, records: Vec<MonitoredRecord>) {
        self.records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(kind, records);
    }

    /// Make loads of one kind fail until cleared
    pub fn fail_kind(&self, kind: RecordKind, failing: bool) {
        let mut set = self.failing.lock().unwrap_or_else(|e| e.into_inner());
        if failing {
            set.insert(kind);
        } else {
            set.remove(&kind);
        }
    }
}

#[async_trait]
impl RecordSource for FakeRecordSource {
    async fn load(&self, kind: RecordKind) -> Result<Vec<MonitoredRecord>, SourceError> {
        if self
            .failing
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(&kind)
        {
            return Err(SourceError::Unavailable(format!("{} offline", kind)));
        }
        Ok(self
            .records
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&kind)
            .cloned()
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_records_put_for_the_kind() {
        let source = FakeRecordSource::new();
        source.put(
            RecordKind::Trucking,
            vec![MonitoredRecord::new("trk-1", "Acme")],
        );

        let records = source.load(RecordKind::Trucking).await.unwrap();
        assert_eq!(records.len(), 1);
        assert!(source.load(RecordKind::Export).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn injected_failure_is_scoped_to_the_kind() {
        let source = FakeRecordSource::new();
        source.fail_kind(RecordKind::Import, true);

        assert!(source.load(RecordKind::Import).await.is_err());
        assert!(source.load(RecordKind::Export).await.is_ok());

        source.fail_kind(RecordKind::Import, false);
        assert!(source.load(RecordKind::Import).await.is_ok());
    }
}

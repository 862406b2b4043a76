// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record source adapter
//!
//! Supplies current snapshots of each monitored record collection. The
//! engine only reads; records are owned by the host application's
//! document store.

use async_trait::async_trait;
use fw_core::{MonitoredRecord, RecordKind};
use thiserror::Error;

#[cfg(any(test, feature = "test-support"))]
mod fake;
mod json;

pub use json::JsonRecordSource;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeRecordSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("source unavailable: {0}")]
    Unavailable(String),
}

/// Adapter trait for loading record snapshots
#[async_trait]
pub trait RecordSource: Clone + Send + Sync + 'static {
    /// Load the current records of one kind
    async fn load(&self, kind: RecordKind) -> Result<Vec<MonitoredRecord>, SourceError>;
}

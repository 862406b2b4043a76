// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the scan engine

use fw_storage::LedgerError;
use thiserror::Error;

/// Errors that abort a scan cycle
///
/// Transient collaborator failures (record source, notifier, settings)
/// are logged and isolated inside the cycle; only dedup-state failures
/// reach here, because deciding against a stale ledger risks duplicate
/// dispatch for every remaining candidate.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

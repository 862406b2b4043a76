// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op notifier for when desktop notifications are disabled.

use super::{NotifyAdapter, NotifyError};
use async_trait::async_trait;
use fw_core::Notification;

/// Notifier that discards everything.
///
/// Used in headless deployments where the ledger bookkeeping should
/// still run.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpNotifier;

impl NoOpNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl NotifyAdapter for NoOpNotifier {
    async fn notify(&self, _notification: Notification) -> Result<(), NotifyError> {
        Ok(())
    }
}

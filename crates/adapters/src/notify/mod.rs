// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Notification adapter for desktop notifications

use async_trait::async_trait;
use fw_core::Notification;
use std::process::Command;
use thiserror::Error;

#[cfg(any(test, feature = "test-support"))]
mod fake;
mod noop;

pub use noop::NoOpNotifier;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeNotifier;

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification failed: {0}")]
    Failed(String),
    #[error("osascript error: {0}")]
    Osascript(String),
}

/// Adapter trait for notification delivery
///
/// The engine treats delivery as fire-and-forget: a returned error only
/// means the dedup entry is withheld so the alert retries on the next
/// eligible cycle.
#[async_trait]
pub trait NotifyAdapter: Clone + Send + Sync + 'static {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError>;
}

/// macOS desktop notification via osascript
#[derive(Clone, Debug, Default)]
pub struct OsascriptNotifier;

impl OsascriptNotifier {
    pub fn new() -> Self {
        Self
    }

    fn build_script(&self, notification: &Notification) -> String {
        format!(
            r#"display notification "{}" with title "{}""#,
            escape_applescript(&notification.body),
            escape_applescript(&notification.title),
        )
    }
}

#[async_trait]
impl NotifyAdapter for OsascriptNotifier {
    async fn notify(&self, notification: Notification) -> Result<(), NotifyError> {
        let script = self.build_script(&notification);

        let output = Command::new("osascript")
            .arg("-e")
            .arg(&script)
            .output()
            .map_err(|e| NotifyError::Failed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(NotifyError::Osascript(stderr.to_string()));
        }

        Ok(())
    }
}

/// Escape special characters for AppleScript strings
fn escape_applescript(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}

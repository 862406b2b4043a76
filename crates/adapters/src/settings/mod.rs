// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Settings source adapter
//!
//! Loads the user-editable alert configuration document. Absence of the
//! document means monitoring is disabled, which is `Ok(None)` rather
//! than an error.

use async_trait::async_trait;
use fw_core::AlertConfig;

#[cfg(any(test, feature = "test-support"))]
mod fake;
mod json;

pub use json::JsonSettingsSource;

#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeSettingsSource;

pub use super::records::SourceError;

/// Adapter trait for loading alert settings
#[async_trait]
pub trait SettingsSource: Clone + Send + Sync + 'static {
    /// Load the current settings document, if one exists
    async fn load(&self) -> Result<Option<AlertConfig>, SourceError>;
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake settings source for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{SettingsSource, SourceError};
use async_trait::async_trait;
use fw_core::AlertConfig;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Fake settings source holding an optional in-memory document
#[derive(Clone, Default)]
pub struct FakeSettingsSource {
    config: Arc<Mutex<Option<AlertConfig>>>,
    failing: Arc<AtomicBool>,
    loads: Arc<AtomicUsize>,
}

impl FakeSettingsSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AlertConfig) -> Self {
        let source = Self::default();
        source.put(Some(config));
        source
    }

    /// Replace the settings document (None = absent)
    pub fn put(&self, config: Option<AlertConfig>) {
        *self.config.lock().unwrap_or_else(|e| e.into_inner()) = config;
    }

    /// Make subsequent loads fail (or succeed again)
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// How many times `load` has been called
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SettingsSource for FakeSettingsSource {
    async fn load(&self) -> Result<Option<AlertConfig>, SourceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if self.failing.load(Ordering::SeqCst) {
            return Err(SourceError::Unavailable("settings offline".to_string()));
        }
        Ok(self
            .config
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }
}

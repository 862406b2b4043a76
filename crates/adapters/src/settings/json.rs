// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON-file-backed settings source

use super::{SettingsSource, SourceError};
use async_trait::async_trait;
use fw_core::AlertConfig;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

/// Settings source reading a single JSON document
#[derive(Clone, Debug)]
pub struct JsonSettingsSource {
    path: PathBuf,
}

impl JsonSettingsSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl SettingsSource for JsonSettingsSource {
    async fn load(&self) -> Result<Option<AlertConfig>, SourceError> {
        let file = match File::open(&self.path) {
            Ok(f) => f,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        Ok(Some(serde_json::from_reader(BufReader::new(file))?))
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Record snapshots consumed by the reminder engine
//!
//! The host application stores shipment files in a document database;
//! the engine only ever sees read-only snapshots in this shape. Date
//! fields travel as `YYYY-MM-DD` strings, with the empty string meaning
//! unset, matching the stored documents.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Stable unique identifier of a record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for RecordId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for RecordId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Name of a date field on a record, as stored in the document (camelCase)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldName(pub String);

impl FieldName {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Human-readable label for notification titles
    pub fn label(&self) -> String {
        match self.0.as_str() {
            "dropDate" => "Drop Date".to_string(),
            "pickDate" => "Pick Date".to_string(),
            "returnDate" => "Return Date".to_string(),
            "deliveryDate" => "Delivery Date".to_string(),
            "etaFinalPod" => "ETA Final POD".to_string(),
            "etaPort" => "ETA Port".to_string(),
            "cutoffDate" => "Cutoff Date".to_string(),
            other => title_case(other),
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for FieldName {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FieldName {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Split a camelCase field name into title-cased words
fn title_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            out.extend(c.to_uppercase());
        } else if c.is_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

/// The record collections the engine scans
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordKind {
    Export,
    Import,
    Trucking,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Export, RecordKind::Import, RecordKind::Trucking];
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Export => write!(f, "export"),
            RecordKind::Import => write!(f, "import"),
            RecordKind::Trucking => write!(f, "trucking"),
        }
    }
}

/// A read-only snapshot of one shipment record
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitoredRecord {
    pub id: RecordId,
    #[serde(default)]
    pub customer_label: String,
    #[serde(default)]
    pub archived: bool,
    /// Named date fields, `YYYY-MM-DD` or empty string for unset
    #[serde(flatten)]
    pub dates: BTreeMap<FieldName, String>,
}

impl MonitoredRecord {
    pub fn new(id: impl Into<RecordId>, customer_label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            customer_label: customer_label.into(),
            archived: false,
            dates: BTreeMap::new(),
        }
    }

    pub fn with_date(mut self, field: impl Into<FieldName>, value: impl Into<String>) -> Self {
        self.dates.insert(field.into(), value.into());
        self
    }

    pub fn archived(mut self) -> Self {
        self.archived = true;
        self
    }

    /// Parse a date field, treating missing/empty/unparseable values as unset
    pub fn date(&self, field: &FieldName) -> Option<NaiveDate> {
        let raw = self.dates.get(field)?;
        parse_date(raw)
    }
}

/// Parse a `YYYY-MM-DD` date string; empty or malformed input is `None`
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok()
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;

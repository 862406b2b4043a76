// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dedup keys, ledger entries, and notification content
//!
//! The triple (record id, date field, offset days) identifies one
//! potential notification occurrence. The engine must never fire the
//! same triple twice; everything else about a notification is
//! presentation.

use crate::record::{FieldName, RecordId, RecordKind};
use crate::window::LeadTime;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of one potential notification occurrence
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DedupKey {
    pub record_id: RecordId,
    pub field: FieldName,
    pub offset_days: u8,
}

impl DedupKey {
    pub fn new(record_id: impl Into<RecordId>, field: impl Into<FieldName>, lead: LeadTime) -> Self {
        Self {
            record_id: record_id.into(),
            field: field.into(),
            offset_days: lead.days() as u8,
        }
    }
}

impl fmt::Display for DedupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}d", self.record_id, self.field, self.offset_days)
    }
}

/// One fired notification, as persisted in the ledger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentNotification {
    pub record_id: RecordId,
    #[serde(rename = "dateFieldName")]
    pub field: FieldName,
    pub offset_days: u8,
    #[serde(rename = "sentAtTimestamp")]
    pub sent_at: DateTime<Utc>,
}

impl SentNotification {
    pub fn new(key: DedupKey, sent_at: DateTime<Utc>) -> Self {
        Self {
            record_id: key.record_id,
            field: key.field,
            offset_days: key.offset_days,
            sent_at,
        }
    }

    pub fn key(&self) -> DedupKey {
        DedupKey {
            record_id: self.record_id.clone(),
            field: self.field.clone(),
            offset_days: self.offset_days,
        }
    }
}

/// A notification ready for delivery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub title: String,
    pub body: String,
}

impl Notification {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// A due reminder candidate produced by one scan
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: RecordKind,
    pub key: DedupKey,
    pub customer_label: String,
    pub field_label: String,
    pub target: NaiveDate,
    pub lead: LeadTime,
}

impl Notice {
    /// Render the delivery content for this candidate
    pub fn to_notification(&self) -> Notification {
        let title = format!("{} {}", self.field_label, self.lead.phrase());
        let body = format!(
            "{}: {}",
            self.customer_label,
            self.target.format("%Y-%m-%d")
        );
        Notification::new(title, body)
    }
}

#[cfg(test)]
#[path = "notice_tests.rs"]
mod tests;

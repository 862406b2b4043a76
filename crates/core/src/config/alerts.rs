// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Alert configuration
//!
//! Which date fields are monitored per record kind, and which lead-time
//! offsets are active. The settings document is user-editable in the host
//! application and loaded fresh on every scan; all defaulting happens
//! here at the serde boundary, never at read sites.

use crate::record::{FieldName, RecordKind};
use crate::window::LeadTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-field monitoring flags for one record kind
pub type FieldToggles = BTreeMap<FieldName, bool>;

/// Enablement of the fixed lead-time offset set {3, 2, 1, 0}
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OffsetToggles {
    pub three_days: bool,
    pub two_days: bool,
    pub one_day: bool,
    pub day_of: bool,
}

impl Default for OffsetToggles {
    fn default() -> Self {
        Self {
            three_days: true,
            two_days: true,
            one_day: true,
            day_of: true,
        }
    }
}

impl OffsetToggles {
    pub fn none() -> Self {
        Self {
            three_days: false,
            two_days: false,
            one_day: false,
            day_of: false,
        }
    }

    pub fn is_enabled(&self, lead: LeadTime) -> bool {
        match lead {
            LeadTime::ThreeDays => self.three_days,
            LeadTime::TwoDays => self.two_days,
            LeadTime::OneDay => self.one_day,
            LeadTime::DayOf => self.day_of,
        }
    }

    /// Enabled lead times, longest first
    pub fn enabled(&self) -> Vec<LeadTime> {
        LeadTime::ALL
            .into_iter()
            .filter(|lead| self.is_enabled(*lead))
            .collect()
    }
}

/// User-editable alert settings document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlertConfig {
    pub export: FieldToggles,
    pub import: FieldToggles,
    pub trucking: FieldToggles,
    pub offsets: OffsetToggles,
}

impl AlertConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fields(&self, kind: RecordKind) -> &FieldToggles {
        match kind {
            RecordKind::Export => &self.export,
            RecordKind::Import => &self.import,
            RecordKind::Trucking => &self.trucking,
        }
    }

    /// Turn monitoring on for a field of the given kind
    pub fn monitor(&mut self, kind: RecordKind, field: impl Into<FieldName>) {
        let toggles = match kind {
            RecordKind::Export => &mut self.export,
            RecordKind::Import => &mut self.import,
            RecordKind::Trucking => &mut self.trucking,
        };
        toggles.insert(field.into(), true);
    }

    pub fn with_offsets(mut self, offsets: OffsetToggles) -> Self {
        self.offsets = offsets;
        self
    }

    /// Fields of the given kind with monitoring enabled
    pub fn monitored_fields(&self, kind: RecordKind) -> Vec<FieldName> {
        self.fields(kind)
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(field, _)| field.clone())
            .collect()
    }

    pub fn enabled_offsets(&self) -> Vec<LeadTime> {
        self.offsets.enabled()
    }

    /// True when this configuration can never produce a notification
    pub fn is_inert(&self) -> bool {
        let no_fields = RecordKind::ALL
            .into_iter()
            .all(|kind| self.monitored_fields(kind).is_empty());
        no_fields || self.enabled_offsets().is_empty()
    }
}

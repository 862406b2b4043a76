// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Due-window evaluation for lead-time reminders
//!
//! A reminder with a lead time of N days must fire exactly once, on the
//! single calendar day that is N days before the target date. The
//! predicate "target within N days" is continuously true as the date
//! approaches, so it is sharpened with a "but not within N-1 days"
//! guard. Day-of reminders use a plain same-day check since there is no
//! N-1 window at zero.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of supported lead-time offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LeadTime {
    ThreeDays,
    TwoDays,
    OneDay,
    DayOf,
}

impl LeadTime {
    pub const ALL: [LeadTime; 4] = [
        LeadTime::ThreeDays,
        LeadTime::TwoDays,
        LeadTime::OneDay,
        LeadTime::DayOf,
    ];

    /// Days before the target date at which this lead time fires
    pub fn days(self) -> i64 {
        match self {
            LeadTime::ThreeDays => 3,
            LeadTime::TwoDays => 2,
            LeadTime::OneDay => 1,
            LeadTime::DayOf => 0,
        }
    }

    /// Lead time for a stored offset value, if it is one of the supported set
    pub fn from_days(days: u8) -> Option<Self> {
        match days {
            3 => Some(LeadTime::ThreeDays),
            2 => Some(LeadTime::TwoDays),
            1 => Some(LeadTime::OneDay),
            0 => Some(LeadTime::DayOf),
            _ => None,
        }
    }

    /// Phrase used in notification titles
    pub fn phrase(self) -> String {
        match self {
            LeadTime::DayOf => "today".to_string(),
            LeadTime::OneDay => "in 1 day".to_string(),
            other => format!("in {} days", other.days()),
        }
    }
}

impl fmt::Display for LeadTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d", self.days())
    }
}

/// True when `target` falls inside the inclusive window `[today, today + days]`
fn within(target: NaiveDate, today: NaiveDate, days: i64) -> bool {
    target >= today && target <= today + Duration::days(days)
}

/// Decide whether a reminder for `target` is due on `today` at the given lead time
///
/// Due at most one calendar day per (target, lead) pair; past targets are
/// never due.
pub fn is_due(target: NaiveDate, today: NaiveDate, lead: LeadTime) -> bool {
    match lead.days() {
        0 => target == today,
        n => within(target, today, n) && !within(target, today, n - 1),
    }
}

/// Evaluate a raw date-string field; empty or unparseable input is never due
pub fn due_for(raw: &str, today: NaiveDate, lead: LeadTime) -> bool {
    match crate::record::parse_date(raw) {
        Some(target) => is_due(target, today, lead),
        None => false,
    }
}

#[cfg(test)]
#[path = "window_tests.rs"]
mod tests;

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fw-core: Core library for the Freightwatch reminder engine
//!
//! This crate provides:
//! - The record snapshot model the engine scans (export, import, trucking)
//! - Typed alert configuration with defaulting at the boundary
//! - The pure due-window evaluator for lead-time reminders
//! - Dedup keys and ledger entry types
//! - A clock abstraction for testable time handling

pub mod clock;
pub mod config;
pub mod notice;
pub mod record;
pub mod window;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{AlertConfig, FieldToggles, OffsetToggles};
pub use notice::{DedupKey, Notice, Notification, SentNotification};
pub use record::{FieldName, MonitoredRecord, RecordId, RecordKind};
pub use window::{due_for, is_due, LeadTime};

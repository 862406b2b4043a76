// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One scan cycle: gate, evaluate, dedup, dispatch
//!
//! The dispatcher walks every (record, monitored date field, enabled
//! offset) triple, asks the window evaluator whether a reminder is due
//! today, and fires each due key through the notifier exactly once. The
//! dedup key is written to the ledger immediately after a successful
//! delivery, before the next candidate is considered, so a failure
//! later in the cycle can never re-fire what already went out.

use crate::error::ScanError;
use chrono::{NaiveDate, Timelike, Utc};
use fw_adapters::{NotifyAdapter, RecordSource, SettingsSource};
use fw_core::{
    is_due, Clock, DedupKey, FieldName, LeadTime, MonitoredRecord, Notice, RecordKind,
};
use fw_storage::SentLedger;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

/// Default local hour at which reminders fire
pub const DEFAULT_FIRE_HOUR: u32 = 9;

/// Default period of the scan timer
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_secs(60 * 60);

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Local wall-clock hour during which scans evaluate candidates
    pub fire_hour: u32,
    /// How often the scheduler ticks
    pub tick_interval: Duration,
    /// Path of the sent-notification ledger document
    pub ledger_path: PathBuf,
}

impl EngineConfig {
    pub fn new(ledger_path: impl Into<PathBuf>) -> Self {
        Self {
            fire_hour: DEFAULT_FIRE_HOUR,
            tick_interval: DEFAULT_TICK_INTERVAL,
            ledger_path: ledger_path.into(),
        }
    }

    pub fn with_fire_hour(mut self, hour: u32) -> Self {
        self.fire_hour = hour;
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

/// Why a scan cycle did or did not evaluate candidates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanOutcome {
    /// Candidates were evaluated and dispatched as needed
    Completed,
    /// Local hour did not match the firing hour
    GateClosed,
    /// No settings document, or nothing monitored
    Unconfigured,
    /// Settings could not be loaded; retried next tick
    SettingsUnavailable,
    /// Another scan was already in flight; tick coalesced
    AlreadyRunning,
}

/// Result of one scan cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    pub outcome: ScanOutcome,
    /// Candidates the window evaluator marked due
    pub due: usize,
    /// Notifications delivered and recorded
    pub dispatched: usize,
    /// Due candidates suppressed by the ledger
    pub duplicates: usize,
    /// Deliveries that failed and were left for the next cycle
    pub delivery_failures: usize,
}

impl ScanReport {
    fn skipped(outcome: ScanOutcome) -> Self {
        Self {
            outcome,
            due: 0,
            dispatched: 0,
            duplicates: 0,
            delivery_failures: 0,
        }
    }
}

/// Orchestrates one gated, deduplicated scan over all record kinds
pub struct Dispatcher<S, R, N, C> {
    settings: S,
    records: R,
    notify: N,
    clock: C,
    config: EngineConfig,
    /// Serializes scans; a tick during an in-flight scan is coalesced
    scan_lock: Mutex<()>,
}

impl<S, R, N, C> Dispatcher<S, R, N, C>
where
    S: SettingsSource,
    R: RecordSource,
    N: NotifyAdapter,
    C: Clock,
{
    pub fn new(settings: S, records: R, notify: N, clock: C, config: EngineConfig) -> Self {
        Self {
            settings,
            records,
            notify,
            clock,
            config,
            scan_lock: Mutex::new(()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one scan cycle
    ///
    /// Never panics and only returns an error when dedup state cannot be
    /// read or written; every other failure is logged and isolated so
    /// the remaining candidates still get their chance this cycle.
    pub async fn scan(&self) -> Result<ScanReport, ScanError> {
        let Ok(_guard) = self.scan_lock.try_lock() else {
            return Ok(ScanReport::skipped(ScanOutcome::AlreadyRunning));
        };

        let now = self.clock.now();
        if now.hour() != self.config.fire_hour {
            debug!(hour = now.hour(), fire_hour = self.config.fire_hour, "outside firing hour");
            return Ok(ScanReport::skipped(ScanOutcome::GateClosed));
        }

        let alerts = match self.settings.load().await {
            Ok(Some(alerts)) => alerts,
            Ok(None) => {
                debug!("no alert settings; nothing to monitor");
                return Ok(ScanReport::skipped(ScanOutcome::Unconfigured));
            }
            Err(e) => {
                warn!(error = %e, "alert settings unavailable, skipping cycle");
                return Ok(ScanReport::skipped(ScanOutcome::SettingsUnavailable));
            }
        };
        if alerts.is_inert() {
            return Ok(ScanReport::skipped(ScanOutcome::Unconfigured));
        }

        let today = now.date_naive();
        let now_utc = now.with_timezone(&Utc);
        let mut ledger = SentLedger::load_compacted(&self.config.ledger_path, now_utc)?;

        let offsets = alerts.enabled_offsets();
        let mut report = ScanReport::skipped(ScanOutcome::Completed);

        for kind in RecordKind::ALL {
            let fields = alerts.monitored_fields(kind);
            if fields.is_empty() {
                continue;
            }

            let records = match self.records.load(kind).await {
                Ok(records) => records,
                Err(e) => {
                    warn!(kind = %kind, error = %e, "record source unavailable, skipping kind");
                    continue;
                }
            };

            for notice in due_notices(kind, &records, &fields, &offsets, today) {
                report.due += 1;

                if ledger.contains(&notice.key) {
                    report.duplicates += 1;
                    continue;
                }

                match self.notify.notify(notice.to_notification()).await {
                    Ok(()) => {
                        // Persist before the next candidate so a partial
                        // cycle cannot re-fire this key on retry
                        ledger.record(notice.key.clone(), now_utc)?;
                        report.dispatched += 1;
                        info!(key = %notice.key, "reminder dispatched");
                    }
                    Err(e) => {
                        warn!(key = %notice.key, error = %e, "delivery failed, will retry next eligible cycle");
                        report.delivery_failures += 1;
                    }
                }
            }
        }

        Ok(report)
    }
}

/// Enumerate due reminder candidates for one record kind
///
/// Archived records and missing/empty/unparseable date values never
/// produce a candidate.
pub fn due_notices(
    kind: RecordKind,
    records: &[MonitoredRecord],
    fields: &[FieldName],
    offsets: &[LeadTime],
    today: NaiveDate,
) -> Vec<Notice> {
    let mut notices = Vec::new();
    for record in records.iter().filter(|r| !r.archived) {
        for field in fields {
            let Some(target) = record.date(field) else {
                continue;
            };
            for lead in offsets {
                if !is_due(target, today, *lead) {
                    continue;
                }
                notices.push(Notice {
                    kind,
                    key: DedupKey::new(record.id.clone(), field.clone(), *lead),
                    customer_label: record.customer_label.clone(),
                    field_label: field.label(),
                    target,
                    lead: *lead,
                });
            }
        }
    }
    notices
}

#[cfg(test)]
#[path = "scan_tests.rs"]
mod tests;

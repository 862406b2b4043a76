// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

//! Integration tests for the scan engine
//!
//! Drives full multi-cycle scenarios through fakes: lead-time firing,
//! dedup across cycles, day-of follow-up, gate enforcement, and the
//! durable ledger surviving an engine rebuild.

use chrono::{Duration as ChronoDuration, Local, TimeZone};
use fw_adapters::{FakeNotifier, FakeRecordSource, FakeSettingsSource};
use fw_core::{AlertConfig, FakeClock, MonitoredRecord, OffsetToggles, RecordKind};
use fw_engine::{Dispatcher, EngineConfig, ScanOutcome};
use std::path::Path;
use tempfile::TempDir;

type TestDispatcher = Dispatcher<FakeSettingsSource, FakeRecordSource, FakeNotifier, FakeClock>;

/// Export dropDate monitored at offsets {3, 0}
fn drop_at_three_and_day_of() -> AlertConfig {
    let mut config = AlertConfig::new();
    config.monitor(RecordKind::Export, "dropDate");
    config.with_offsets(OffsetToggles {
        three_days: true,
        two_days: false,
        one_day: false,
        day_of: true,
    })
}

fn make_dispatcher(
    ledger_path: &Path,
    config: AlertConfig,
) -> (TestDispatcher, FakeRecordSource, FakeNotifier, FakeClock) {
    let records = FakeRecordSource::new();
    let notifier = FakeNotifier::new();
    // 2025-06-10 09:00 local, inside the default firing hour
    let clock = FakeClock::at(Local.with_ymd_and_hms(2025, 6, 10, 9, 0, 0).unwrap());
    let dispatcher = Dispatcher::new(
        FakeSettingsSource::with_config(config),
        records.clone(),
        notifier.clone(),
        clock.clone(),
        EngineConfig::new(ledger_path),
    );
    (dispatcher, records, notifier, clock)
}

#[tokio::test]
async fn lead_time_then_day_of_scenario() {
    let dir = TempDir::new().unwrap();
    let (dispatcher, records, notifier, clock) =
        make_dispatcher(&dir.path().join("ledger.json"), drop_at_three_and_day_of());

    // One export record whose drop date is three days out
    records.put(
        RecordKind::Export,
        vec![MonitoredRecord::new("exp-104", "Acme Freight").with_date("dropDate", "2025-06-13")],
    );

    // First cycle at the firing hour: exactly one notification, offset 3
    let report = dispatcher.scan().await.unwrap();
    assert_eq!(report.outcome, ScanOutcome::Completed);
    assert_eq!(report.dispatched, 1);
    let calls = notifier.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].title, "Drop Date in 3 days");
    assert_eq!(calls[0].body, "Acme Freight: 2025-06-13");

    // Second cycle the same day: nothing new
    let report = dispatcher.scan().await.unwrap();
    assert_eq!(report.dispatched, 0);
    assert_eq!(report.duplicates, 1);
    assert_eq!(notifier.calls().len(), 1);

    // Three days later the drop date is today: exactly one more, day-of
    clock.advance(ChronoDuration::days(3));
    let report = dispatcher.scan().await.unwrap();
    assert_eq!(report.dispatched, 1);
    let calls = notifier.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[1].title, "Drop Date today");

    // And the day after, nothing fires for a past date
    clock.advance(ChronoDuration::days(1));
    let report = dispatcher.scan().await.unwrap();
    assert_eq!(report.due, 0);
    assert_eq!(notifier.calls().len(), 2);
}

#[tokio::test]
async fn dedup_survives_an_engine_rebuild() {
    let dir = TempDir::new().unwrap();
    let ledger_path = dir.path().join("ledger.json");

    let (dispatcher, records, notifier, _clock) =
        make_dispatcher(&ledger_path, drop_at_three_and_day_of());
    records.put(
        RecordKind::Export,
        vec![MonitoredRecord::new("exp-104", "Acme Freight").with_date("dropDate", "2025-06-13")],
    );
    dispatcher.scan().await.unwrap();
    assert_eq!(notifier.calls().len(), 1);

    // A new dispatcher over the same ledger path sees the fired key
    let (rebuilt, records, notifier, _clock) =
        make_dispatcher(&ledger_path, drop_at_three_and_day_of());
    records.put(
        RecordKind::Export,
        vec![MonitoredRecord::new("exp-104", "Acme Freight").with_date("dropDate", "2025-06-13")],
    );
    let report = rebuilt.scan().await.unwrap();
    assert_eq!(report.duplicates, 1);
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn archived_records_never_notify() {
    let dir = TempDir::new().unwrap();
    let (dispatcher, records, notifier, clock) =
        make_dispatcher(&dir.path().join("ledger.json"), drop_at_three_and_day_of());

    records.put(
        RecordKind::Export,
        vec![
            MonitoredRecord::new("exp-104", "Acme Freight")
                .with_date("dropDate", "2025-06-13")
                .archived(),
        ],
    );

    for _ in 0..4 {
        dispatcher.scan().await.unwrap();
        clock.advance(ChronoDuration::days(1));
    }
    assert!(notifier.calls().is_empty());
}

#[tokio::test]
async fn gate_blocks_out_of_hour_ticks_even_with_due_candidates() {
    let dir = TempDir::new().unwrap();
    let (dispatcher, records, notifier, clock) =
        make_dispatcher(&dir.path().join("ledger.json"), drop_at_three_and_day_of());

    records.put(
        RecordKind::Export,
        vec![MonitoredRecord::new("exp-104", "Acme Freight").with_date("dropDate", "2025-06-13")],
    );

    for hour in [0, 8, 10, 23] {
        clock.set(Local.with_ymd_and_hms(2025, 6, 10, hour, 30, 0).unwrap());
        let report = dispatcher.scan().await.unwrap();
        assert_eq!(report.outcome, ScanOutcome::GateClosed);
    }
    assert!(notifier.calls().is_empty());

    // The same candidate fires once the clock re-enters the firing hour
    clock.set(Local.with_ymd_and_hms(2025, 6, 10, 9, 30, 0).unwrap());
    dispatcher.scan().await.unwrap();
    assert_eq!(notifier.calls().len(), 1);
}

#[tokio::test]
async fn each_kind_and_field_gets_its_own_reminder() {
    let dir = TempDir::new().unwrap();
    let mut config = AlertConfig::new();
    config.monitor(RecordKind::Export, "dropDate");
    config.monitor(RecordKind::Import, "etaFinalPod");
    config.monitor(RecordKind::Trucking, "pickDate");
    let config = config.with_offsets(OffsetToggles {
        three_days: false,
        two_days: false,
        one_day: false,
        day_of: true,
    });

    let (dispatcher, records, notifier, _clock) =
        make_dispatcher(&dir.path().join("ledger.json"), config);

    records.put(
        RecordKind::Export,
        vec![MonitoredRecord::new("exp-1", "Acme").with_date("dropDate", "2025-06-10")],
    );
    records.put(
        RecordKind::Import,
        vec![MonitoredRecord::new("imp-1", "Nordwind").with_date("etaFinalPod", "2025-06-10")],
    );
    records.put(
        RecordKind::Trucking,
        vec![MonitoredRecord::new("trk-1", "Borealis").with_date("pickDate", "2025-06-10")],
    );

    let report = dispatcher.scan().await.unwrap();
    assert_eq!(report.dispatched, 3);

    let titles: Vec<String> = notifier.calls().iter().map(|n| n.title.clone()).collect();
    assert!(titles.contains(&"Drop Date today".to_string()));
    assert!(titles.contains(&"ETA Final POD today".to_string()));
    assert!(titles.contains(&"Pick Date today".to_string()));
}

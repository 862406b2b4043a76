// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[test]
fn date_parses_iso_value() {
    let record = MonitoredRecord::new("rec-1", "Acme Freight").with_date("dropDate", "2025-06-13");

    let date = record.date(&FieldName::from("dropDate")).unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2025, 6, 13).unwrap());
}

#[test]
fn date_is_none_for_missing_field() {
    let record = MonitoredRecord::new("rec-1", "Acme Freight");
    assert!(record.date(&FieldName::from("dropDate")).is_none());
}

#[parameterized(
    empty = { "" },
    whitespace = { "  " },
    garbage = { "not-a-date" },
    wrong_format = { "06/13/2025" },
    out_of_range = { "2025-13-40" },
)]
fn date_is_none_for_unparseable_values(raw: &str) {
    let record = MonitoredRecord::new("rec-1", "Acme Freight").with_date("dropDate", raw);
    assert!(record.date(&FieldName::from("dropDate")).is_none());
}

#[test]
fn archived_builder_sets_flag() {
    let record = MonitoredRecord::new("rec-1", "Acme Freight").archived();
    assert!(record.archived);
}

#[test]
fn record_deserializes_from_document_shape() {
    let json = r#"{
        "id": "exp-104",
        "customerLabel": "Acme Freight",
        "archived": false,
        "dropDate": "2025-06-13",
        "etaFinalPod": ""
    }"#;

    let record: MonitoredRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, RecordId::from("exp-104"));
    assert_eq!(record.customer_label, "Acme Freight");
    assert!(record.date(&FieldName::from("dropDate")).is_some());
    assert!(record.date(&FieldName::from("etaFinalPod")).is_none());
}

#[test]
fn record_tolerates_missing_optional_fields() {
    let record: MonitoredRecord = serde_json::from_str(r#"{"id": "exp-1"}"#).unwrap();
    assert!(!record.archived);
    assert!(record.customer_label.is_empty());
    assert!(record.dates.is_empty());
}

#[parameterized(
    known_drop = { "dropDate", "Drop Date" },
    known_eta = { "etaFinalPod", "ETA Final POD" },
    known_pick = { "pickDate", "Pick Date" },
    unknown_camel = { "emptyReturnDate", "Empty Return Date" },
    unknown_single = { "booked", "Booked" },
)]
fn field_labels(name: &str, expected: &str) {
    assert_eq!(FieldName::from(name).label(), expected);
}

#[test]
fn record_kind_round_trips_through_display() {
    for kind in RecordKind::ALL {
        let json = serde_json::to_string(&kind).unwrap();
        assert_eq!(json, format!("\"{}\"", kind));
    }
}

//! Serialization behavior of the on-disk document types.

use chrono::NaiveDate;
use kartei_model::{DeckConfig, ItemRecord, QuotaLedger};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

#[test]
fn record_round_trips_through_yaml() {
    let record = ItemRecord {
        content: Some("chain rule".to_string()),
        date: Some(date("2026-09-02")),
        last_seen: Some(date("2026-08-30")),
        past_dates: vec![date("2026-08-28"), date("2026-08-30")],
        touch: Some(1_756_500_000.25),
        suspend: false,
    };
    let yaml = serde_yaml::to_string(&record).unwrap();
    let back: ItemRecord = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, record);
}

#[test]
fn record_dates_serialize_as_plain_strings() {
    let record = ItemRecord {
        date: Some(date("2026-09-02")),
        ..ItemRecord::default()
    };
    let yaml = serde_yaml::to_string(&record).unwrap();
    assert!(yaml.contains("2026-09-02"), "got: {yaml}");
}

#[test]
fn absent_fields_stay_off_disk() {
    let yaml = serde_yaml::to_string(&ItemRecord::default()).unwrap();
    assert!(!yaml.contains("content"));
    assert!(!yaml.contains("suspend"));
    assert!(!yaml.contains("past_dates"));
}

#[test]
fn hand_written_record_with_unquoted_date_parses() {
    let record: ItemRecord = serde_yaml::from_str("date: 2026-09-02\ntouch: 12\n").unwrap();
    assert_eq!(record.date, Some(date("2026-09-02")));
    assert_eq!(record.touch, Some(12.0));
}

#[test]
fn ledger_round_trips() {
    let ledger = QuotaLedger {
        reviews_today: 4,
        new_today: 2,
        date: date("2026-08-30"),
    };
    let yaml = serde_yaml::to_string(&ledger).unwrap();
    let back: QuotaLedger = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(back, ledger);
}

#[test]
fn config_with_null_caps_is_unlimited() {
    let config: DeckConfig =
        serde_yaml::from_str("max_reviews_per_day: null\njitter: 0.2\n").unwrap();
    assert_eq!(config.max_reviews_per_day, None);
    assert_eq!(config.jitter, Some(0.2));
}

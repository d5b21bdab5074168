//! Calendar projection of upcoming due dates.
//!
//! Read-only: consumes the same record format as the scheduler but mutates
//! nothing. Past-due dates project onto today, dates compare as dates, and
//! each entry carries the recency interval (due date minus `last_seen`)
//! when the card has been seen before.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::NaiveDate;

use kartei_model::{DeckName, ItemRecord, label_from_path};
use kartei_store::{list_decks, list_records, load_document};

use crate::error::Result;

/// One card in the calendar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingEntry {
    pub deck: DeckName,
    pub card: String,
    /// Days between `last_seen` and the projected due date; absent for cards
    /// scheduled without ever having been reviewed.
    pub interval: Option<i64>,
}

/// Cards grouped by projected due date, earliest first.
///
/// `horizon` drops dates more than that many days from today. Entries within
/// a date sort by interval, unseen cards last.
pub fn upcoming_by_date(
    root: &Path,
    today: NaiveDate,
    horizon: Option<u64>,
) -> Result<BTreeMap<NaiveDate, Vec<UpcomingEntry>>> {
    let max_date = horizon.map(|days| {
        today
            .checked_add_days(chrono::Days::new(days))
            .unwrap_or(NaiveDate::MAX)
    });
    let mut calendar: BTreeMap<NaiveDate, Vec<UpcomingEntry>> = BTreeMap::new();

    for (deck, dir) in list_decks(root)? {
        for path in list_records(&dir)? {
            let record: ItemRecord = load_document(&path)?;
            if record.suspend {
                continue;
            }
            let Some(date) = record.date else {
                continue;
            };
            // A past-due card is effectively due today.
            let projected = date.max(today);
            if max_date.is_some_and(|max| projected > max) {
                continue;
            }
            let interval = record.last_seen.map(|seen| (projected - seen).num_days());
            calendar.entry(projected).or_default().push(UpcomingEntry {
                deck: deck.clone(),
                card: label_from_path(&path),
                interval,
            });
        }
    }
    for entries in calendar.values_mut() {
        entries.sort_by_key(|entry| entry.interval.unwrap_or(i64::MAX));
    }
    Ok(calendar)
}

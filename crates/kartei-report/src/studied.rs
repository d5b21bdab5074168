//! Historical audit: which cards were studied on a given date.

use std::path::Path;

use chrono::{Days, NaiveDate};

use kartei_model::{DeckName, ItemRecord};
use kartei_store::{list_decks, list_records, load_document, touch_key};

use crate::error::{ReportError, Result};

/// One card that was studied on the target date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudiedRow {
    pub deck: DeckName,
    pub card: String,
}

/// Resolves a target date argument: absolute `YYYY-MM-DD`, or relative
/// `<N>d` meaning N days before today. Future dates are rejected.
pub fn resolve_target_date(spec: &str, today: NaiveDate) -> Result<NaiveDate> {
    let target = match parse_days_ago(spec) {
        Some(days) => today
            .checked_sub_days(Days::new(days))
            .ok_or_else(|| ReportError::InvalidDate(spec.to_string()))?,
        None => spec
            .parse()
            .map_err(|_| ReportError::InvalidDate(spec.to_string()))?,
    };
    if target > today {
        return Err(ReportError::FutureDate(target));
    }
    Ok(target)
}

fn parse_days_ago(spec: &str) -> Option<u64> {
    let digits = spec.strip_suffix('d')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// Scans all decks for cards whose `last_seen` equals the target or whose
/// history contains it, ordered by touch within each deck.
pub fn studied_on(root: &Path, target: NaiveDate) -> Result<Vec<StudiedRow>> {
    let mut rows = Vec::new();
    for (deck, dir) in list_decks(root)? {
        let mut cards: Vec<(String, f64)> = Vec::new();
        for path in list_records(&dir)? {
            let record: ItemRecord = load_document(&path)?;
            if record.last_seen.is_none() && record.past_dates.is_empty() {
                continue;
            }
            if record.last_seen == Some(target) || record.past_dates.contains(&target) {
                cards.push((record.label(&path), touch_key(&record, &path)));
            }
        }
        cards.sort_by(|a, b| a.1.total_cmp(&b.1));
        rows.extend(cards.into_iter().map(|(card, _)| StudiedRow {
            deck: deck.clone(),
            card,
        }));
    }
    Ok(rows)
}

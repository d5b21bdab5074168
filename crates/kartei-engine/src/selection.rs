//! Quota-aware candidate selection across all decks.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{Days, NaiveDate};
use tracing::debug;

use kartei_model::{DeckConfig, DeckName, ItemRecord, QuotaLedger};
use kartei_store::{list_decks, list_records, load_document, load_ledger, resolve_deck_config, touch_key};

use crate::error::Result;

/// Per-deck selection result for one invocation.
#[derive(Debug)]
pub struct DeckSelection {
    /// Deck directory, needed later to persist the ledger.
    pub dir: PathBuf,
    /// Due candidates, oldest touch first, truncated to remaining quota.
    pub due: Vec<PathBuf>,
    /// New candidates, oldest touch first, truncated to remaining quota.
    pub new: Vec<PathBuf>,
    /// The deck's normalized quota ledger.
    pub ledger: QuotaLedger,
}

/// Scans every deck under the root and classifies its items.
///
/// An item with no `date` is new; an item with a date is due when the date
/// falls on or before `today + lookahead`. Suspended items are invisible.
/// Decks yielding neither due nor new candidates are omitted.
pub fn select_decks(
    root: &std::path::Path,
    global: &DeckConfig,
    today: NaiveDate,
    lookahead: u64,
) -> Result<BTreeMap<DeckName, DeckSelection>> {
    let horizon = today
        .checked_add_days(Days::new(lookahead))
        .unwrap_or(NaiveDate::MAX);
    let mut selections = BTreeMap::new();

    for (deck, dir) in list_decks(root)? {
        let config = resolve_deck_config(&dir, global)?;
        let ledger = load_ledger(&dir, today)?;

        let mut due: Vec<(PathBuf, f64)> = Vec::new();
        let mut new: Vec<(PathBuf, f64)> = Vec::new();
        for path in list_records(&dir)? {
            let record: ItemRecord = load_document(&path)?;
            if record.suspend {
                continue;
            }
            let touch = touch_key(&record, &path);
            match record.date {
                None => new.push((path, touch)),
                Some(date) if date <= horizon => due.push((path, touch)),
                Some(_) => {}
            }
        }

        let due = finalize(
            due,
            config.max_reviews_per_day,
            ledger.consumed(false),
        );
        let new = finalize(new, config.max_new_per_day, ledger.consumed(true));
        if due.is_empty() && new.is_empty() {
            continue;
        }
        debug!(deck = %deck, due = due.len(), new = new.len(), "deck selected");
        selections.insert(deck, DeckSelection { dir, due, new, ledger });
    }
    Ok(selections)
}

/// Sorts candidates FIFO by touch and truncates to the remaining quota.
///
/// A consumed counter above the cap leaves zero remaining rather than
/// underflowing.
fn finalize(mut candidates: Vec<(PathBuf, f64)>, cap: Option<u32>, consumed: u32) -> Vec<PathBuf> {
    candidates.sort_by(|a, b| a.1.total_cmp(&b.1));
    let mut paths: Vec<PathBuf> = candidates.into_iter().map(|(path, _)| path).collect();
    if let Some(cap) = cap {
        paths.truncate(cap.saturating_sub(consumed) as usize);
    }
    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn write_card(dir: &std::path::Path, name: &str, body: &str) {
        std::fs::write(dir.join(name), body).unwrap();
    }

    fn seed_deck(root: &std::path::Path, deck: &str) -> PathBuf {
        let dir = root.join(deck);
        std::fs::create_dir(&dir).unwrap();
        dir
    }

    #[test]
    fn items_without_date_are_new_regardless_of_other_fields() {
        let root = TempDir::new().unwrap();
        let deck = seed_deck(root.path(), "Math");
        write_card(&deck, "a.yaml", "last_seen: 2026-08-01\ntouch: 1\n");
        write_card(&deck, "b.yaml", "");

        let result =
            select_decks(root.path(), &DeckConfig::default(), date("2026-08-30"), 0).unwrap();
        let selection = &result[&DeckName::new("Math").unwrap()];
        assert!(selection.due.is_empty());
        assert_eq!(selection.new.len(), 2);
    }

    #[test]
    fn suspended_items_never_appear() {
        let root = TempDir::new().unwrap();
        let deck = seed_deck(root.path(), "Math");
        write_card(&deck, "due.yaml", "date: 2026-08-01\nsuspend: true\ntouch: 1\n");
        write_card(&deck, "new.yaml", "suspend: true\ntouch: 2\n");

        for lookahead in [0, 5, 400] {
            let result =
                select_decks(root.path(), &DeckConfig::default(), date("2026-08-30"), lookahead)
                    .unwrap();
            assert!(result.is_empty());
        }
    }

    #[test]
    fn lookahead_widens_the_due_window() {
        let root = TempDir::new().unwrap();
        let deck = seed_deck(root.path(), "Math");
        write_card(&deck, "soon.yaml", "date: 2026-09-02\ntouch: 1\n");

        let today = date("2026-08-30");
        let closed = select_decks(root.path(), &DeckConfig::default(), today, 0).unwrap();
        assert!(closed.is_empty());
        let open = select_decks(root.path(), &DeckConfig::default(), today, 3).unwrap();
        assert_eq!(open[&DeckName::new("Math").unwrap()].due.len(), 1);
    }

    #[test]
    fn new_quota_keeps_the_oldest_touch() {
        let root = TempDir::new().unwrap();
        let deck = seed_deck(root.path(), "Math");
        write_card(&deck, "late.yaml", "touch: 200\n");
        write_card(&deck, "early.yaml", "touch: 100\n");
        write_card(&deck, "config.yaml", "max_new_per_day: 1\n");

        let result =
            select_decks(root.path(), &DeckConfig::default(), date("2026-08-30"), 0).unwrap();
        let selection = &result[&DeckName::new("Math").unwrap()];
        assert_eq!(selection.new.len(), 1);
        assert!(selection.new[0].ends_with("early.yaml"));
    }

    #[test]
    fn overconsumed_quota_selects_nothing_instead_of_underflowing() {
        let root = TempDir::new().unwrap();
        let deck = seed_deck(root.path(), "Math");
        write_card(&deck, "a.yaml", "date: 2026-08-01\ntouch: 1\n");
        write_card(&deck, "config.yaml", "max_reviews_per_day: 1\n");
        write_card(&deck, ".memory.yaml", "reviews_today: 5\ndate: 2026-08-30\n");

        let result =
            select_decks(root.path(), &DeckConfig::default(), date("2026-08-30"), 0).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn unparsable_record_counts_as_blank_new_item() {
        let root = TempDir::new().unwrap();
        let deck = seed_deck(root.path(), "Math");
        write_card(&deck, "mangled.yaml", "date: [unterminated");

        let result =
            select_decks(root.path(), &DeckConfig::default(), date("2026-08-30"), 0).unwrap();
        let selection = &result[&DeckName::new("Math").unwrap()];
        assert_eq!(selection.new.len(), 1);
    }
}

//! Folds grading outcomes back into the per-deck quota ledgers.

use std::collections::{BTreeMap, BTreeSet};

use tracing::warn;

use kartei_model::DeckName;
use kartei_store::persist_ledger;

use crate::error::Result;
use crate::selection::DeckSelection;

/// Accumulates (deck, is_new) outcomes and persists touched ledgers once per
/// invocation.
#[derive(Debug, Default)]
pub struct QuotaUpdater {
    touched: BTreeSet<DeckName>,
}

impl QuotaUpdater {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any outcome has been recorded.
    pub fn has_changes(&self) -> bool {
        !self.touched.is_empty()
    }

    /// Increments the deck's counter for the category the review consumed.
    pub fn record(
        &mut self,
        selections: &mut BTreeMap<DeckName, DeckSelection>,
        deck: &DeckName,
        is_new: bool,
    ) {
        match selections.get_mut(deck) {
            Some(selection) => {
                selection.ledger.record(is_new);
                self.touched.insert(deck.clone());
            }
            None => warn!(deck = %deck, "quota outcome for unselected deck dropped"),
        }
    }

    /// Overwrites the ledger file of every touched deck.
    pub fn persist(&self, selections: &BTreeMap<DeckName, DeckSelection>) -> Result<()> {
        for deck in &self.touched {
            if let Some(selection) = selections.get(deck) {
                persist_ledger(&selection.dir, &selection.ledger)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use kartei_model::QuotaLedger;
    use kartei_store::load_ledger;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn selections_with(dir: &std::path::Path, deck: &DeckName) -> BTreeMap<DeckName, DeckSelection> {
        let mut map = BTreeMap::new();
        map.insert(
            deck.clone(),
            DeckSelection {
                dir: dir.to_path_buf(),
                due: vec![dir.join("a.yaml")],
                new: vec![],
                ledger: QuotaLedger::fresh(date("2026-08-30")),
            },
        );
        map
    }

    #[test]
    fn outcomes_accumulate_and_round_trip_through_disk() {
        let dir = TempDir::new().unwrap();
        let deck = DeckName::new("Math").unwrap();
        let mut selections = selections_with(dir.path(), &deck);
        let mut updater = QuotaUpdater::new();
        assert!(!updater.has_changes());

        for _ in 0..3 {
            updater.record(&mut selections, &deck, false);
        }
        updater.record(&mut selections, &deck, true);
        assert!(updater.has_changes());
        updater.persist(&selections).unwrap();

        let reloaded = load_ledger(dir.path(), date("2026-08-30")).unwrap();
        assert_eq!(reloaded.reviews_today, 3);
        assert_eq!(reloaded.new_today, 1);
    }

    #[test]
    fn unknown_deck_outcome_is_dropped() {
        let dir = TempDir::new().unwrap();
        let deck = DeckName::new("Math").unwrap();
        let other = DeckName::new("History").unwrap();
        let mut selections = selections_with(dir.path(), &deck);
        let mut updater = QuotaUpdater::new();
        updater.record(&mut selections, &other, true);
        assert!(!updater.has_changes());
    }
}

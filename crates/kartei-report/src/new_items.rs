//! Listing of unscheduled (new) cards in one deck.

use std::path::{Path, PathBuf};

use kartei_model::{DeckName, ItemRecord};
use kartei_store::{list_records, load_document, touch_key};

use crate::error::Result;

/// Paths of every record in the deck with no due date, oldest touch first.
///
/// This is a raw audit listing: unlike the selection engine it does not
/// consult the suspend flag or any quota.
pub fn list_new_cards(root: &Path, deck: &DeckName) -> Result<Vec<PathBuf>> {
    let deck_dir = root.join(deck.folder());
    let mut cards: Vec<(PathBuf, f64)> = Vec::new();
    for path in list_records(&deck_dir)? {
        let record: ItemRecord = load_document(&path)?;
        if record.date.is_none() {
            let touch = touch_key(&record, &path);
            cards.push((path, touch));
        }
    }
    cards.sort_by(|a, b| a.1.total_cmp(&b.1));
    Ok(cards.into_iter().map(|(path, _)| path).collect())
}

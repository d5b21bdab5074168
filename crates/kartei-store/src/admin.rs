//! Deck and card administration.

use std::path::Path;

use chrono::NaiveDate;
use tracing::warn;

use kartei_model::{DeckName, ItemRecord, validate_card_name};

use crate::document::{now_touch, save_document};
use crate::error::{Result, StoreError};

/// Creates an empty deck directory.
///
/// Returns `false` (with a warning) when the deck already exists; nothing
/// is touched in that case.
pub fn add_deck(root: &Path, deck: &DeckName) -> Result<bool> {
    let deck_dir = root.join(deck.folder());
    if deck_dir.exists() {
        warn!(deck = %deck, "deck already exists");
        return Ok(false);
    }
    std::fs::create_dir_all(&deck_dir).map_err(|source| StoreError::DeckCreate {
        path: deck_dir,
        source,
    })?;
    Ok(true)
}

/// Creates a new card record in an existing deck.
///
/// The record starts with `touch` set to the current instant; an explicit
/// due date schedules it immediately, otherwise the card is new. Fails when
/// the deck is missing or the record file already exists.
pub fn add_card(root: &Path, deck: &DeckName, card: &str, due: Option<NaiveDate>) -> Result<()> {
    validate_card_name(card)?;
    let deck_dir = root.join(deck.folder());
    if !deck_dir.is_dir() {
        return Err(StoreError::DeckNotFound { path: deck_dir });
    }
    let path = deck_dir.join(format!("{}.yaml", card.replace(' ', "_")));
    if path.exists() {
        return Err(StoreError::RecordExists { path });
    }
    let record = ItemRecord {
        touch: Some(now_touch()),
        date: due,
        ..ItemRecord::default()
    };
    save_document(&path, &record)
}

//! Ordered application of a whole response batch.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use kartei_model::{DeckName, Response};

use crate::error::{EngineError, Result};
use crate::grade::{Applied, apply_response};
use crate::quota::QuotaUpdater;
use crate::selection::DeckSelection;
use crate::table::ReviewRow;

/// Applies `(row index, response)` pairs in order against one table build.
///
/// An unknown index or `Bury` on a new card skips only that response,
/// reported through `on_skipped`. Any other failure aborts the remainder of
/// the batch, but the ledgers of responses already applied are persisted
/// before the error propagates; the quota counters on disk always account
/// for every record file that was rewritten.
///
/// Returns whether any response was applied.
pub fn apply_batch(
    rows: &[ReviewRow],
    responses: &[(usize, Response)],
    selections: &mut BTreeMap<DeckName, DeckSelection>,
    today: NaiveDate,
    mut on_applied: impl FnMut(&Applied),
    mut on_skipped: impl FnMut(&EngineError),
) -> Result<bool> {
    let mut updater = QuotaUpdater::new();
    let mut aborted = None;
    let mut changes = false;

    for &(index, response) in responses {
        match apply_response(rows, index, response, today) {
            Ok(applied) => {
                on_applied(&applied);
                if let Some((deck, is_new)) = applied.quota_outcome() {
                    let deck = deck.clone();
                    updater.record(selections, &deck, is_new);
                }
                changes = true;
            }
            Err(error @ (EngineError::UnknownRow(_) | EngineError::BuryNew)) => {
                on_skipped(&error);
            }
            Err(error) => {
                aborted = Some(error);
                break;
            }
        }
    }

    updater.persist(selections)?;
    match aborted {
        Some(error) => Err(error),
        None => Ok(changes),
    }
}

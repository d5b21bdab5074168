//! The per-item grading state machine.
//!
//! One response token applies to one row of the review table. Every
//! successful mutation is a full read-modify-write of the record file;
//! each response is self-contained, so an interrupt between responses
//! never leaves a half-applied batch.

use chrono::{Days, NaiveDate};
use tracing::info;

use kartei_model::{DeckName, ItemRecord, Response};
use kartei_store::{load_document, now_touch, save_document};

use crate::error::{EngineError, Result};
use crate::table::ReviewRow;

/// What a successfully applied response did.
#[derive(Debug, Clone, PartialEq)]
pub enum Applied {
    /// The card got a new due date.
    Rescheduled {
        deck: DeckName,
        label: String,
        due: NaiveDate,
        is_new: bool,
    },
    /// The card was suspended; it still consumes a quota slot.
    Suspended {
        deck: DeckName,
        label: String,
        is_new: bool,
    },
    /// Only the touch key changed; exempt from quota accounting.
    Cycled { deck: DeckName, label: String },
}

impl Applied {
    /// The (deck, is_new) pair the quota updater folds in, if any.
    pub fn quota_outcome(&self) -> Option<(&DeckName, bool)> {
        match self {
            Applied::Rescheduled { deck, is_new, .. }
            | Applied::Suspended { deck, is_new, .. } => Some((deck, *is_new)),
            Applied::Cycled { .. } => None,
        }
    }
}

/// Applies one response to the 1-based row `index` of the table.
///
/// Unknown indices and `Bury` on a new card fail without mutating anything.
pub fn apply_response(rows: &[ReviewRow], index: usize, response: Response, today: NaiveDate) -> Result<Applied> {
    let row = index
        .checked_sub(1)
        .and_then(|i| rows.get(i))
        .ok_or(EngineError::UnknownRow(index))?;

    match response {
        Response::Cycle => cycle(row),
        Response::Suspend => suspend(row),
        Response::Bury => {
            if row.is_new() {
                return Err(EngineError::BuryNew);
            }
            reschedule(row, 1, today, false)
        }
        Response::Days(days) => reschedule(row, i64::from(days), today, true),
        Response::Grade(level) => reschedule(row, row.interval_for(level), today, true),
    }
}

/// Sends the card to the back of today's queue by refreshing its touch key.
fn cycle(row: &ReviewRow) -> Result<Applied> {
    let mut record: ItemRecord = load_document(&row.path)?;
    record.touch = Some(now_touch());
    save_document(&row.path, &record)?;
    info!(deck = %row.deck, card = %row.label, "cycled to back of today's cards");
    Ok(Applied::Cycled {
        deck: row.deck.clone(),
        label: row.label.clone(),
    })
}

fn suspend(row: &ReviewRow) -> Result<Applied> {
    let mut record: ItemRecord = load_document(&row.path)?;
    record.suspend = true;
    save_document(&row.path, &record)?;
    info!(deck = %row.deck, card = %row.label, "suspended");
    Ok(Applied::Suspended {
        deck: row.deck.clone(),
        label: row.label.clone(),
        is_new: row.is_new(),
    })
}

/// Moves the card's due date `interval` days out.
///
/// Burying records today in the history but deliberately leaves `last_seen`
/// alone, so the card's recency basis is unaffected by the postponement.
fn reschedule(row: &ReviewRow, interval: i64, today: NaiveDate, seen: bool) -> Result<Applied> {
    let mut record: ItemRecord = load_document(&row.path)?;
    let due = today
        .checked_add_days(Days::new(interval.max(0) as u64))
        .unwrap_or(NaiveDate::MAX);
    if seen {
        record.last_seen = Some(today);
    }
    record.date = Some(due);
    record.past_dates.push(today);
    save_document(&row.path, &record)?;
    info!(deck = %row.deck, card = %row.label, %due, "rescheduled");
    Ok(Applied::Rescheduled {
        deck: row.deck.clone(),
        label: row.label.clone(),
        due,
        is_new: row.is_new(),
    })
}

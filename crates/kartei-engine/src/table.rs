//! Review table construction with suggested intervals.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use rand::Rng;
use rand::rngs::StdRng;

use kartei_model::{DeckName, GradeLevel, ItemRecord};
use kartei_store::load_document;

use crate::error::Result;
use crate::selection::DeckSelection;

/// How many rows the table carries per deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableMode {
    /// One row per deck: the head of the due list, else the head of the
    /// new list.
    #[default]
    TopCard,
    /// One row per candidate across both lists of every deck.
    ShowAll,
}

/// One row of the review table. Indices handed to the grade applicator are
/// 1-based positions into the built row vector and stay stable for the
/// lifetime of the invocation.
#[derive(Debug, Clone)]
pub struct ReviewRow {
    pub deck: DeckName,
    pub n_due: usize,
    pub n_new: usize,
    /// The candidate record this row acts on.
    pub path: PathBuf,
    /// Display label, annotated "(new)" when the card came off the new list.
    pub label: String,
    /// Suggested intervals in days.
    pub hard: i64,
    pub good: i64,
    pub easy: i64,
}

impl ReviewRow {
    /// Grade-applicator state: a row whose deck had no due candidates at
    /// selection time acts on a New item.
    pub fn is_new(&self) -> bool {
        self.n_due == 0
    }

    /// Suggested interval for a named grade.
    pub fn interval_for(&self, level: GradeLevel) -> i64 {
        match level {
            GradeLevel::Hard => self.hard,
            GradeLevel::Good => self.good,
            GradeLevel::Easy => self.easy,
        }
    }
}

/// Builds the ordered review table from selection results.
///
/// The `Good` interval is the recency basis (days since `last_seen`, or 1
/// when never seen), perturbed multiplicatively when `jitter` is set. The
/// RNG is seeded once per invocation by the caller and consumed in row
/// order, so equal seeds and inputs reproduce equal tables.
pub fn build_rows(
    selections: &BTreeMap<DeckName, DeckSelection>,
    mode: TableMode,
    today: NaiveDate,
    jitter: Option<f64>,
    rng: &mut StdRng,
) -> Result<Vec<ReviewRow>> {
    let mut rows = Vec::new();
    for (deck, selection) in selections {
        let n_due = selection.due.len();
        let n_new = selection.new.len();
        match mode {
            TableMode::TopCard => {
                let (path, from_new) = match selection.due.first() {
                    Some(path) => (path, false),
                    None => match selection.new.first() {
                        Some(path) => (path, true),
                        None => continue,
                    },
                };
                rows.push(make_row(deck, path, from_new, n_due, n_new, today)?);
            }
            TableMode::ShowAll => {
                for path in &selection.due {
                    rows.push(make_row(deck, path, false, n_due, n_new, today)?);
                }
                for path in &selection.new {
                    rows.push(make_row(deck, path, true, n_due, n_new, today)?);
                }
            }
        }
    }
    if let Some(jitter) = jitter {
        for row in &mut rows {
            let noise = rng.r#gen::<f64>() * 2.0 * jitter - jitter + 1.0;
            row.good = (row.good as f64 * noise).round() as i64;
        }
    }
    for row in &mut rows {
        row.hard = (row.good / 2).max(1);
        row.easy = row.good * 2;
    }
    Ok(rows)
}

fn make_row(
    deck: &DeckName,
    path: &Path,
    from_new: bool,
    n_due: usize,
    n_new: usize,
    today: NaiveDate,
) -> Result<ReviewRow> {
    let record: ItemRecord = load_document(path)?;
    let basis = match record.last_seen {
        Some(last_seen) => (today - last_seen).num_days(),
        None => 1,
    };
    let mut label = record.label(path);
    if from_new {
        label.push_str(" (new)");
    }
    // Hard and Easy are derived from Good in build_rows, after jitter.
    Ok(ReviewRow {
        deck: deck.clone(),
        n_due,
        n_new,
        path: path.to_path_buf(),
        label,
        hard: 0,
        good: basis,
        easy: 0,
    })
}

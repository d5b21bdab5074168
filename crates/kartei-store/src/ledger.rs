//! Quota ledger persistence.

use std::path::Path;

use chrono::NaiveDate;

use kartei_model::QuotaLedger;

use crate::discovery::LEDGER_FILE;
use crate::document::{load_document, save_document};
use crate::error::Result;

/// Loads a deck's quota ledger, normalized against `today`.
///
/// Stale counters (stored date strictly before today) reset to zero before
/// any quota arithmetic sees them.
pub fn load_ledger(deck_dir: &Path, today: NaiveDate) -> Result<QuotaLedger> {
    let mut ledger: QuotaLedger = load_document(&deck_dir.join(LEDGER_FILE))?;
    ledger.normalize(today);
    Ok(ledger)
}

/// Overwrites the deck's ledger file in full.
pub fn persist_ledger(deck_dir: &Path, ledger: &QuotaLedger) -> Result<()> {
    save_document(&deck_dir.join(LEDGER_FILE), ledger)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn missing_ledger_is_fresh_today() {
        let dir = TempDir::new().unwrap();
        let ledger = load_ledger(dir.path(), date("2026-08-30")).unwrap();
        assert_eq!(ledger, QuotaLedger::fresh(date("2026-08-30")));
    }

    #[test]
    fn yesterdays_counters_reset_on_load() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(LEDGER_FILE),
            "reviews_today: 9\nnew_today: 4\ndate: 2026-08-29\n",
        )
        .unwrap();
        let ledger = load_ledger(dir.path(), date("2026-08-30")).unwrap();
        assert_eq!(ledger, QuotaLedger::fresh(date("2026-08-30")));
    }

    #[test]
    fn persist_then_reload_is_identical() {
        let dir = TempDir::new().unwrap();
        let ledger = QuotaLedger {
            reviews_today: 3,
            new_today: 1,
            date: date("2026-08-30"),
        };
        persist_ledger(dir.path(), &ledger).unwrap();
        let back = load_ledger(dir.path(), date("2026-08-30")).unwrap();
        assert_eq!(back, ledger);
    }
}

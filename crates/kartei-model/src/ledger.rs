use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Per-deck daily quota counters, persisted as `.memory.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaLedger {
    /// Due-card reviews consumed today.
    #[serde(default)]
    pub reviews_today: u32,

    /// New cards consumed today.
    #[serde(default)]
    pub new_today: u32,

    /// Date the counters refer to.
    #[serde(default = "today")]
    pub date: NaiveDate,
}

impl Default for QuotaLedger {
    fn default() -> Self {
        Self::fresh(today())
    }
}

impl QuotaLedger {
    /// A zeroed ledger dated `date`.
    pub fn fresh(date: NaiveDate) -> Self {
        Self {
            reviews_today: 0,
            new_today: 0,
            date,
        }
    }

    /// Resets stale counters. Must run at load time, before any quota
    /// arithmetic: a stored date strictly before `today` zeroes both
    /// counters and advances the date.
    pub fn normalize(&mut self, today: NaiveDate) {
        if self.date < today {
            self.date = today;
            self.reviews_today = 0;
            self.new_today = 0;
        }
    }

    /// Counter already consumed for the given category.
    pub fn consumed(&self, new: bool) -> u32 {
        if new { self.new_today } else { self.reviews_today }
    }

    /// Records one consumed review in the given category.
    pub fn record(&mut self, new: bool) {
        if new {
            self.new_today += 1;
        } else {
            self.reviews_today += 1;
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

//! The kartei scheduling core: quota-aware selection, review-table
//! construction with interval suggestion, the grading state machine, and
//! quota accounting.
//!
//! Everything here is synchronous and single-process; the record store is
//! plain files with whole-file rewrites and no locking, so exactly one
//! invocation may run against a root directory at a time.

pub mod batch;
pub mod error;
pub mod grade;
pub mod quota;
pub mod selection;
pub mod table;

pub use batch::apply_batch;
pub use error::{EngineError, Result};
pub use grade::{Applied, apply_response};
pub use quota::QuotaUpdater;
pub use selection::{DeckSelection, select_decks};
pub use table::{ReviewRow, TableMode, build_rows};

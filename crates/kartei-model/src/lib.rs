//! Data model for the kartei scheduler: records, decks, config, quota
//! ledger and response tokens. No I/O lives here.

pub mod config;
pub mod deck;
pub mod error;
pub mod ledger;
pub mod record;
pub mod response;

pub use config::{DEFAULT_SEED, DeckConfig};
pub use deck::{DeckName, validate_card_name};
pub use error::{ModelError, Result};
pub use ledger::QuotaLedger;
pub use record::{ItemRecord, label_from_path};
pub use response::{GradeLevel, Response};

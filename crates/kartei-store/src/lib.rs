//! Filesystem record store: tolerant YAML document I/O, deck discovery,
//! config resolution, quota-ledger persistence, administration, and the
//! git-backed snapshot capability.

pub mod admin;
pub mod config;
pub mod discovery;
pub mod document;
pub mod error;
pub mod ledger;
pub mod snapshot;

pub use admin::{add_card, add_deck};
pub use config::{load_global_config, resolve_deck_config};
pub use discovery::{CONFIG_FILE, LEDGER_FILE, list_decks, list_records};
pub use document::{load_document, now_touch, save_document, touch_key};
pub use error::{Result, StoreError};
pub use ledger::{load_ledger, persist_ledger};
pub use snapshot::{GitSnapshotStore, SnapshotStore};

//! Configuration resolution: deck-local file, then root file, then defaults.

use std::path::Path;

use kartei_model::DeckConfig;

use crate::discovery::CONFIG_FILE;
use crate::document::load_document;
use crate::error::Result;

/// Loads the root (global) configuration, defaulting when absent.
pub fn load_global_config(root: &Path) -> Result<DeckConfig> {
    load_document(&root.join(CONFIG_FILE))
}

/// Resolves the effective configuration for one deck directory.
///
/// A deck-local `config.yaml` replaces the global one wholesale (its own
/// missing fields fall back to defaults, not to global values); without a
/// local file the global configuration applies.
pub fn resolve_deck_config(deck_dir: &Path, global: &DeckConfig) -> Result<DeckConfig> {
    let local_path = deck_dir.join(CONFIG_FILE);
    if local_path.exists() {
        load_document(&local_path)
    } else {
        Ok(global.clone())
    }
}

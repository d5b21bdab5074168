//! Deck and record discovery in a scheduler root folder.

use std::path::{Path, PathBuf};

use kartei_model::DeckName;

use crate::error::{Result, StoreError};

/// Global and deck-local configuration filename.
pub const CONFIG_FILE: &str = "config.yaml";

/// Per-deck quota ledger filename, machine-managed.
pub const LEDGER_FILE: &str = ".memory.yaml";

/// Lists deck directories under the root, sorted by display name.
///
/// The snapshot repository's `.git` directory and anything that is not a
/// directory are skipped.
pub fn list_decks(root: &Path) -> Result<Vec<(DeckName, PathBuf)>> {
    let mut decks = Vec::new();
    for entry in read_dir(root)? {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Some(folder) = path.file_name().and_then(|name| name.to_str()) else {
            continue;
        };
        if folder == ".git" {
            continue;
        }
        decks.push((DeckName::from_folder(folder), path));
    }
    decks.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(decks)
}

/// Lists the record files of one deck directory, in directory order.
///
/// Only `.yaml` files count, and the config and ledger documents are not
/// records.
pub fn list_records(deck_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut records = Vec::new();
    for entry in read_dir(deck_dir)? {
        let path = entry.path();
        if !path.is_file() || !is_record_file(&path) {
            continue;
        }
        records.push(path);
    }
    Ok(records)
}

fn is_record_file(path: &Path) -> bool {
    let Some(name) = path.file_name().and_then(|name| name.to_str()) else {
        return false;
    };
    // Suffix matches, so a differently-prefixed variant of either document
    // name is still excluded from the record set.
    name.ends_with(".yaml") && !name.ends_with(CONFIG_FILE) && !name.ends_with(LEDGER_FILE)
}

fn read_dir(dir: &Path) -> Result<Vec<std::fs::DirEntry>> {
    if !dir.is_dir() {
        return Err(StoreError::DeckNotFound {
            path: dir.to_path_buf(),
        });
    }
    let entries = std::fs::read_dir(dir).map_err(|source| StoreError::DirectoryRead {
        path: dir.to_path_buf(),
        source,
    })?;
    entries
        .collect::<std::io::Result<Vec<_>>>()
        .map_err(|source| StoreError::DirectoryRead {
            path: dir.to_path_buf(),
            source,
        })
}

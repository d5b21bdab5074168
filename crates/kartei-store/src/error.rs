//! Error types for record-store operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing the record store.
#[derive(Debug, Error)]
pub enum StoreError {
    // === File system ===
    /// Deck directory not found.
    #[error("deck directory not found: {path}")]
    DeckNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read a document file.
    #[error("failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a document file.
    #[error("failed to write {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to create a deck directory.
    #[error("failed to create deck directory {path}: {source}")]
    DeckCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Administration ===
    /// Target record already exists; add-card refuses to overwrite.
    #[error("{path} already exists")]
    RecordExists { path: PathBuf },

    // === Serialization ===
    /// A document could not be rendered back to YAML.
    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    // === Version control collaborator ===
    /// Snapshot repository operation failed; not recovered locally.
    #[error("snapshot repository error: {0}")]
    Snapshot(#[from] git2::Error),

    /// Nothing to undo: the snapshot history has no prior commit.
    #[error("nothing to undo")]
    NothingToUndo,

    /// Model-level validation failure surfaced through the store.
    #[error(transparent)]
    Model(#[from] kartei_model::ModelError),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;

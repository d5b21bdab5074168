//! Version-snapshot capability backed by a local git repository.
//!
//! The scheduling engine never touches this; only the orchestrating layer
//! commits, and only after all mutations of an invocation are on disk.

use std::path::Path;

use git2::{IndexAddOption, Repository, ResetType, Signature};
use tracing::{debug, info};

use crate::error::{Result, StoreError};

/// Whole-root snapshotting with destructive single-step undo.
pub trait SnapshotStore {
    /// Snapshots the entire root directory as one commit.
    fn commit_all(&self, message: &str) -> Result<()>;

    /// Discards the most recent snapshot (hard reset, not revertible).
    fn revert_last(&self) -> Result<()>;
}

/// `SnapshotStore` over a git repository at the scheduler root.
pub struct GitSnapshotStore {
    repo: Repository,
}

impl GitSnapshotStore {
    /// Opens the repository at `root`, initializing it (with an initial
    /// snapshot) when none exists yet.
    pub fn open_or_init(root: &Path) -> Result<Self> {
        let store = if root.join(".git").is_dir() {
            Self {
                repo: Repository::open(root)?,
            }
        } else {
            info!(root = %root.display(), "initializing snapshot repository");
            let store = Self {
                repo: Repository::init(root)?,
            };
            store.commit_all("Initial snapshot")?;
            store
        };
        Ok(store)
    }

    fn signature(&self) -> Result<Signature<'static>> {
        self.repo
            .signature()
            .or_else(|_| Signature::now("kartei", "kartei@localhost"))
            .map_err(StoreError::from)
    }
}

impl SnapshotStore for GitSnapshotStore {
    fn commit_all(&self, message: &str) -> Result<()> {
        let mut index = self.repo.index()?;
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        index.write()?;
        let tree_id = index.write_tree()?;
        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.signature()?;
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        let oid = self
            .repo
            .commit(Some("HEAD"), &signature, &signature, message, &tree, &parents)?;
        debug!(%oid, "snapshot committed");
        Ok(())
    }

    fn revert_last(&self) -> Result<()> {
        let head = self.repo.head()?.peel_to_commit()?;
        let parent = head.parent(0).map_err(|_| StoreError::NothingToUndo)?;
        self.repo
            .reset(parent.as_object(), ResetType::Hard, None)?;
        info!(discarded = %head.id(), "snapshot reverted");
        Ok(())
    }
}

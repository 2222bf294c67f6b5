//! Ephemeral clone workspaces
//!
//! Each resolution attempt gets its own temporary directory, removed when the
//! workspace is dropped. Removal is best-effort: a failed cleanup is never
//! surfaced as a resolution error.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::GrgError;

/// Subdirectory of the workspace the repository is cloned into
pub const REPO_DIR: &str = "repo";

/// An exclusively owned temporary directory for one clone attempt
#[derive(Debug)]
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a uniquely named empty temporary directory
    pub fn acquire() -> Result<Self, GrgError> {
        let dir = tempfile::Builder::new()
            .prefix("grg-")
            .tempdir()
            .map_err(|source| GrgError::Workspace { source })?;
        Ok(Self { dir })
    }

    /// Directory the clone command runs in
    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Directory holding the bare repository after a successful fetch
    pub fn repo_dir(&self) -> PathBuf {
        self.dir.path().join(REPO_DIR)
    }
}

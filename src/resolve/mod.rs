//! Version resolution pipeline
//!
//! One identifier at a time: acquire a workspace, fetch a shallow bare clone
//! with transport fallback, read tag and commit metadata, and decide the
//! version string. Workspaces are removed on every exit path.

pub mod fetch;
pub mod inspect;
pub mod version;
pub mod workspace;

use std::path::PathBuf;

use crate::error::GrgError;
use crate::exec::git::GitClient;
use crate::exec::subprocess::ProcessRunner;

use fetch::CloneTarget;

/// Resolves repository identifiers into version strings
pub struct Resolver<'a> {
    git: GitClient<'a>,
}

impl<'a> Resolver<'a> {
    pub fn new(git_exe: PathBuf, runner: &'a dyn ProcessRunner, verbose: bool) -> Self {
        Self {
            git: GitClient::new(git_exe, runner, verbose),
        }
    }

    /// Resolve one identifier to either its latest release tag or a
    /// pseudo-version derived from the tip commit.
    pub fn resolve(&self, identifier: &str) -> Result<String, GrgError> {
        let target = CloneTarget::parse(identifier)?;
        let fetched = fetch::fetch_repository(&self.git, &target)?;
        if self.git.verbose() {
            println!("verbose: Fetched {} via {}", identifier, fetched.transport);
        }
        let repo = fetched.workspace.repo_dir();

        // A v-prefixed tag wins outright; any other tag is not a usable
        // release marker and the commit fallback applies.
        if let Some(tag) = inspect::latest_tag(&self.git, &repo) {
            if version::is_release_tag(&tag) {
                return Ok(tag);
            }
        }

        match inspect::latest_commit(&self.git, &repo) {
            Some(commit) => Ok(version::pseudo_version(&commit)),
            None => Err(GrgError::Metadata),
        }
    }
}

//! Shallow bare fetch with dual-transport fallback
//!
//! Clone targets are built from `host/owner/name` identifiers; anything past
//! the owner/name segments is ignored. SSH is tried first, then HTTPS, each
//! attempt into a fresh workspace so a failed clone leaves no partial state
//! behind for the retry.

use std::fmt;

use anyhow::Result;

use crate::error::GrgError;
use crate::exec::git::GitClient;
use crate::exec::subprocess::CommandResult;

use super::workspace::{Workspace, REPO_DIR};

/// Transport scheme used to reach the remote host
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Ssh,
    Https,
}

/// Schemes in fallback order
pub const TRANSPORT_ORDER: [Transport; 2] = [Transport::Ssh, Transport::Https];

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Ssh => write!(f, "ssh"),
            Transport::Https => write!(f, "https"),
        }
    }
}

/// Host and truncated owner/name path of a repository identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloneTarget {
    host: String,
    path: String,
}

impl CloneTarget {
    /// Parse an identifier of the form `host/owner/name[/extra...]`.
    ///
    /// Only the first two path segments after the host are significant; any
    /// further segments are discarded.
    pub fn parse(identifier: &str) -> Result<Self, GrgError> {
        let invalid = || GrgError::InvalidIdentifier {
            identifier: identifier.to_string(),
        };

        let (host, path) = identifier.split_once('/').ok_or_else(invalid)?;
        if host.is_empty() || path.is_empty() {
            return Err(invalid());
        }

        let segments: Vec<&str> = path.split('/').collect();
        let path = if segments.len() > 2 {
            segments[..2].join("/")
        } else {
            path.to_string()
        };

        Ok(Self {
            host: host.to_string(),
            path,
        })
    }

    /// Clone URL for the given transport scheme
    pub fn url(&self, transport: Transport) -> String {
        match transport {
            Transport::Ssh => format!("git@{}:{}", self.host, self.path),
            Transport::Https => format!("https://{}/{}", self.host, self.path),
        }
    }
}

/// Successful fetch: the populated workspace and the scheme that worked
#[derive(Debug)]
pub struct FetchOutcome {
    pub workspace: Workspace,
    pub transport: Transport,
}

/// Shallow bare clone of `target` into a fresh workspace, trying each
/// transport in [`TRANSPORT_ORDER`] until one succeeds.
///
/// A spawn failure counts as a failed attempt like a non-zero exit. Both
/// schemes failing yields [`GrgError::Fetch`].
pub fn fetch_repository(git: &GitClient, target: &CloneTarget) -> Result<FetchOutcome, GrgError> {
    for transport in TRANSPORT_ORDER {
        let workspace = Workspace::acquire()?;

        match clone_into(git, target, transport, &workspace) {
            Ok(result) if result.success => {
                return Ok(FetchOutcome {
                    workspace,
                    transport,
                });
            }
            Ok(_) => {
                if git.verbose() {
                    println!("verbose: Error cloning repository via {}", transport);
                }
            }
            Err(err) => {
                if git.verbose() {
                    println!("verbose: Error cloning repository via {}: {}", transport, err);
                }
            }
        }
        // workspace dropped here, removing any partial clone
    }

    Err(GrgError::Fetch)
}

fn clone_into(
    git: &GitClient,
    target: &CloneTarget,
    transport: Transport,
    workspace: &Workspace,
) -> Result<CommandResult> {
    let url = target.url(transport);
    git.run(
        &["clone", "--depth=1", "--bare", &url, REPO_DIR],
        workspace.root(),
        &[],
    )
}

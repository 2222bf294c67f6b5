//! Tag and commit metadata queries against a fetched snapshot
//!
//! Both queries are best-effort: a non-zero exit or a spawn failure is an
//! expected condition (tagless repository, unborn branch) reported through the
//! return value, never an error. Diagnostic output is echoed by the git client
//! in verbose mode.

use std::path::Path;

use crate::exec::git::GitClient;

/// Date format producing the 14-digit `YYYYMMDDHHMMSS` pseudo-version stamp
const COMMIT_DATE_FORMAT: &str = "--date=format-local:%Y%m%d%H%M%S";

/// Tip commit metadata used for pseudo-version synthesis
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Abbreviated commit hash, exactly 12 hex characters
    pub short_hash: String,
    /// Commit date in UTC as `YYYYMMDDHHMMSS`
    pub timestamp: String,
}

/// Most recent tag reachable from the default tip, if any
pub fn latest_tag(git: &GitClient, repo: &Path) -> Option<String> {
    let result = git
        .run(&["describe", "--tags", "--abbrev=0"], repo, &[])
        .ok()?;
    if !result.success {
        return None;
    }

    let tag = result.stdout.trim().to_string();
    if tag.is_empty() {
        None
    } else {
        Some(tag)
    }
}

/// Tip commit's short hash and UTC timestamp.
///
/// The date query runs with `TZ=UTC` forced so the stamp is identical no
/// matter the host timezone. Either query failing yields `None`; partial
/// success is not reported.
pub fn latest_commit(git: &GitClient, repo: &Path) -> Option<CommitInfo> {
    let date = git
        .run(
            &["log", "-1", COMMIT_DATE_FORMAT, "--format=%cd"],
            repo,
            &[("TZ", "UTC")],
        )
        .ok()?;
    if !date.success {
        return None;
    }
    let timestamp = date.stdout.trim().to_string();

    let hash = git.run(&["rev-parse", "--short=12", "HEAD"], repo, &[]).ok()?;
    if !hash.success {
        return None;
    }
    let short_hash = hash.stdout.trim().to_string();

    if timestamp.is_empty() || short_hash.is_empty() {
        return None;
    }

    Some(CommitInfo {
        short_hash,
        timestamp,
    })
}

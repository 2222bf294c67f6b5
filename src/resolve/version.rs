//! Version string policy
//!
//! A tag is a usable release marker only when it starts with `v`, matching Go
//! module version conventions; the tag is then passed through verbatim with no
//! semver validation. Everything else falls back to the pseudo-version form.

use super::inspect::CommitInfo;

/// Base version used when no release tag exists
pub const PSEUDO_BASE: &str = "v0.0.0";

/// Whether a tag is usable as a release version
pub fn is_release_tag(tag: &str) -> bool {
    tag.starts_with('v')
}

/// Synthesize the canonical "no release yet" version from commit metadata
pub fn pseudo_version(commit: &CommitInfo) -> String {
    format!("{}-{}-{}", PSEUDO_BASE, commit.timestamp, commit.short_hash)
}

//! Error types and helpers for user-friendly error messages
//!
//! Per-repository errors are recovered and reported by identifier; only
//! environment errors (missing git) abort the whole run.

use std::io;

use thiserror::Error;

/// Custom error types with helpful context
#[derive(Error, Debug)]
pub enum GrgError {
    /// Tool/executable not found in PATH
    #[error("could not find {tool} in your PATH")]
    MissingTool { tool: String, hint: String },

    /// Identifier does not look like host/owner/name
    #[error("invalid repository identifier '{identifier}': expected host/owner/name")]
    InvalidIdentifier { identifier: String },

    /// Temporary workspace could not be created
    #[error("could not create a temporary workspace: {source}")]
    Workspace {
        #[source]
        source: io::Error,
    },

    /// Both transport schemes failed to clone the repository
    #[error("could not fetch via either transport; verify access to the repository")]
    Fetch,

    /// Clone succeeded but neither a tag nor a commit could be read
    #[error("failed obtaining information from cloned repository")]
    Metadata,
}

impl GrgError {
    /// Create a missing tool error
    pub fn missing_tool(tool: impl Into<String>, hint: impl Into<String>) -> Self {
        Self::MissingTool {
            tool: tool.into(),
            hint: hint.into(),
        }
    }

    /// Display error with formatting and hints
    pub fn display_with_hints(&self) {
        use console::style;

        eprintln!("\n{} {}", style("ERROR:").red().bold(), self);

        if let GrgError::MissingTool { hint, .. } = self {
            eprintln!("\n{} {}", style("HINT:").yellow().bold(), hint);
        }

        eprintln!();
    }
}

/// Common error hints for missing tools
pub mod hints {
    /// Get hint for missing Git
    pub fn git() -> &'static str {
        "Install Git from https://git-scm.com/ or use your package manager:\n\
         • macOS: brew install git\n\
         • Ubuntu: sudo apt install git\n\
         • Windows: winget install Git.Git"
    }
}

//! grg - generates Go module `require` lines from git repositories
//!
//! Given one or more repository identifiers (`host/owner/name`), grg clones
//! each repository shallowly, inspects its tags and history, and prints a
//! `require` line carrying either the latest release tag or a synthesized
//! pseudo-version.

mod cli;
mod error;
mod exec;
mod report;
mod resolve;

use anyhow::Result;
use clap::Parser;

use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.execute()
}

//! CLI argument parsing and batch orchestration using clap derive macros

use anyhow::{bail, Result};
use clap::{CommandFactory, Parser};

use crate::error::{hints, GrgError};
use crate::exec::subprocess::{locate_tool, SystemRunner};
use crate::report::Report;
use crate::resolve::Resolver;

/// grg - Obtains a require statement based on a git repository
///
/// Each repository identifier is cloned shallowly, its latest release tag (or
/// tip commit) is inspected, and a `require <repo> <version>` line is printed.
#[derive(Parser, Debug)]
#[command(name = "grg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Repository identifiers of the form host/owner/name
    #[arg(value_name = "REPOSITORY")]
    pub repositories: Vec<String>,

    /// Print every git command and its output on failure
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Execute the batch: resolve every repository sequentially, then print
    /// the combined report.
    pub fn execute(self) -> Result<()> {
        if self.repositories.is_empty() {
            Cli::command().print_help()?;
            println!();
            return Ok(());
        }

        // Environment check up front: missing git aborts before any
        // resolution attempt, distinct from per-repository errors.
        let Some(git_exe) = locate_tool("git") else {
            let err = GrgError::missing_tool("git", hints::git());
            err.display_with_hints();
            std::process::exit(1);
        };

        let runner = SystemRunner;
        let resolver = Resolver::new(git_exe, &runner, self.verbose);

        let mut report = Report::default();
        for repository in &self.repositories {
            match resolver.resolve(repository) {
                Ok(version) => report.record_success(repository, &version),
                Err(err) => report.record_failure(repository, err.to_string()),
            }
        }

        print!("{}", report.render());

        if report.has_failures() {
            bail!("one or more repositories could not be processed");
        }

        Ok(())
    }
}

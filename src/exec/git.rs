//! Git invocation wrapper
//!
//! Carries the resolved git path, the runner capability, and the verbose flag
//! so callers don't repeat the echo/dump boilerplate on every query.

use std::path::{Path, PathBuf};

use anyhow::Result;

use super::subprocess::{CommandResult, ProcessRunner};

/// Git client bound to a concrete git executable
pub struct GitClient<'a> {
    exe: PathBuf,
    runner: &'a dyn ProcessRunner,
    verbose: bool,
}

impl<'a> GitClient<'a> {
    pub fn new(exe: PathBuf, runner: &'a dyn ProcessRunner, verbose: bool) -> Self {
        Self {
            exe,
            runner,
            verbose,
        }
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    /// Run a git command in `cwd`, capturing its output.
    ///
    /// In verbose mode the command line is echoed before execution and the
    /// captured output is dumped indented when the command fails.
    pub fn run(&self, args: &[&str], cwd: &Path, env: &[(&str, &str)]) -> Result<CommandResult> {
        if self.verbose {
            println!("verbose: Executing {} {}", self.exe.display(), args.join(" "));
        }

        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        let env: Vec<(String, String)> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let result = self.runner.run(&self.exe, &args, cwd, &env)?;

        if !result.success && self.verbose {
            println!("verbose: Error executing (exit code {}):", result.exit_code);
            for line in result.stdout.lines().chain(result.stderr.lines()) {
                println!("        {}", line);
            }
        }

        Ok(result)
    }
}

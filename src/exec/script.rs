//! Scripted process runner for tests
//!
//! Returns queued responses in order and records every invocation so tests can
//! assert on command lines, working directories, and environment.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{anyhow, Result};

use super::subprocess::{CommandResult, ProcessRunner};

/// One recorded invocation
#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub cwd: PathBuf,
    pub env: Vec<(String, String)>,
}

enum Response {
    Result(CommandResult),
    SpawnError(String),
}

/// Process runner returning pre-scripted responses
pub struct ScriptedRunner {
    responses: RefCell<VecDeque<Response>>,
    calls: RefCell<Vec<RecordedCall>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self {
            responses: RefCell::new(VecDeque::new()),
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Queue a successful invocation producing `stdout`
    pub fn push_ok(&self, stdout: &str) {
        self.responses
            .borrow_mut()
            .push_back(Response::Result(CommandResult {
                success: true,
                exit_code: 0,
                stdout: stdout.to_string(),
                stderr: String::new(),
                duration: Duration::ZERO,
            }));
    }

    /// Queue a failed invocation with the given exit code and stderr
    pub fn push_fail(&self, exit_code: i32, stderr: &str) {
        self.responses
            .borrow_mut()
            .push_back(Response::Result(CommandResult {
                success: false,
                exit_code,
                stdout: String::new(),
                stderr: stderr.to_string(),
                duration: Duration::ZERO,
            }));
    }

    /// Queue a spawn error (process could not be started)
    pub fn push_spawn_error(&self, message: &str) {
        self.responses
            .borrow_mut()
            .push_back(Response::SpawnError(message.to_string()));
    }

    /// All invocations recorded so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.borrow().clone()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(
        &self,
        program: &Path,
        args: &[String],
        cwd: &Path,
        env: &[(String, String)],
    ) -> Result<CommandResult> {
        self.calls.borrow_mut().push(RecordedCall {
            program: program.to_path_buf(),
            args: args.to_vec(),
            cwd: cwd.to_path_buf(),
            env: env.to_vec(),
        });

        match self.responses.borrow_mut().pop_front() {
            Some(Response::Result(result)) => Ok(result),
            Some(Response::SpawnError(message)) => Err(anyhow!(message)),
            None => panic!("unexpected command: {} {}", program.display(), args.join(" ")),
        }
    }
}

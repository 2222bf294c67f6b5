//! External process execution
//!
//! All git invocations go through the [`ProcessRunner`](subprocess::ProcessRunner)
//! capability so the resolution pipeline can be tested with scripted outputs.

pub mod git;
pub mod subprocess;

#[cfg(test)]
pub mod script;

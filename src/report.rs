//! Batch result report
//!
//! Collects per-identifier outcomes in input order and renders errors first,
//! then the require lines.

use std::fmt::Write;

/// Ordered partition of per-identifier outcomes
#[derive(Debug, Default)]
pub struct Report {
    failures: Vec<(String, String)>,
    successes: Vec<String>,
}

impl Report {
    /// Record a resolved version as a require line
    pub fn record_success(&mut self, identifier: &str, version: &str) {
        self.successes
            .push(format!("require {} {}", identifier, version));
    }

    /// Record a failed identifier with its error message
    pub fn record_failure(&mut self, identifier: &str, message: String) {
        self.failures.push((identifier.to_string(), message));
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// Render the report: a blank line, the error section (if any), then one
    /// require line per success.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push('\n');

        if !self.failures.is_empty() {
            out.push_str("The following errors were found:\n");
            for (identifier, message) in &self.failures {
                let _ = writeln!(out, "  {}: {}", identifier, message);
            }
            out.push('\n');
        }

        for line in &self.successes {
            out.push_str(line);
            out.push('\n');
        }

        out
    }
}

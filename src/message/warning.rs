//! Process warning channel
//!
//! Warnings are a third sink, distinct from both console output and the
//! persistent log, so the three can be toggled independently. The default
//! sink writes to stderr; tests and embedders can inject their own.

use colored::Colorize;

pub trait WarningSink: Send + Sync {
    fn emit(&self, message: &str);
}

/// Default warning sink: a colored `Warning:` line on stderr.
#[derive(Debug, Clone, Default)]
pub struct StderrWarnings;

impl WarningSink for StderrWarnings {
    fn emit(&self, message: &str) {
        eprintln!("{} {}", "Warning:".yellow().bold(), message);
    }
}

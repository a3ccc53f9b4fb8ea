//! Lint report model
//!
//! The report is the single value handed from the core to the caller.

use serde::{Deserialize, Serialize};

use super::{Finding, Severity};

/// Per-category finding counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Error-severity findings
    pub errors: usize,
    /// Warning-severity findings
    pub warnings: usize,
    /// Info-severity findings that are not pass confirmations
    pub info: usize,
    /// Pass confirmations
    pub passed: usize,
}

impl Counts {
    /// Tally findings into the four display categories
    #[must_use]
    pub fn tally(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut counts, f| {
            match f.severity {
                Severity::Error => counts.errors += 1,
                Severity::Warning => counts.warnings += 1,
                Severity::Info if f.passed => counts.passed += 1,
                Severity::Info => counts.info += 1,
            }
            counts
        })
    }
}

/// Result of linting one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Label identifying the linted document
    pub file: String,
    /// Number of `\n`-separated lines
    pub lines: usize,
    /// Number of characters
    pub characters: usize,
    /// Characters / 4, rounded
    pub estimated_tokens: usize,
    /// All findings in engine order
    pub findings: Vec<Finding>,
    /// Quality score, 0 to 10 inclusive
    pub score: u8,
    /// Derived counts
    pub counts: Counts,
}

impl Report {
    /// Whether any error-severity finding was produced
    #[must_use]
    pub const fn has_errors(&self) -> bool {
        self.counts.errors > 0
    }

    /// Findings in display order: errors, warnings, passed, then notes
    pub fn display_order(&self) -> impl Iterator<Item = &Finding> {
        let findings = &self.findings;
        findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
            .chain(findings.iter().filter(|f| f.severity == Severity::Warning))
            .chain(findings.iter().filter(|f| f.passed))
            .chain(findings.iter().filter(|f| f.is_note()))
    }
}

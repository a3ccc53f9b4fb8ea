//! Score computation
//!
//! Starts from [`MAX_SCORE`], takes [`ERROR_PENALTY`] per error and
//! [`WARNING_PENALTY`] per rule category that warned at least once, then
//! clamps to `0..=MAX_SCORE`. Info findings never count.

use std::collections::BTreeSet;

use crate::core::models::{Finding, Severity};

/// Score of a document with no errors or warnings
pub const MAX_SCORE: u8 = 10;

/// Deducted for every error-severity finding
pub const ERROR_PENALTY: usize = 2;

/// Deducted once per category with at least one warning
pub const WARNING_PENALTY: usize = 1;

/// Compute the score for a set of findings
#[must_use]
pub fn score(findings: &[Finding]) -> u8 {
    let errors = findings.iter().filter(|f| f.severity == Severity::Error).count();
    let warned_categories: BTreeSet<&str> = findings
        .iter()
        .filter(|f| f.severity == Severity::Warning)
        .map(Finding::category)
        .collect();

    let penalty = errors
        .saturating_mul(ERROR_PENALTY)
        .saturating_add(warned_categories.len() * WARNING_PENALTY);
    MAX_SCORE.saturating_sub(u8::try_from(penalty).unwrap_or(u8::MAX))
}

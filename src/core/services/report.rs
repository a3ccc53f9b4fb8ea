//! Report assembly

use super::scorer::score;
use crate::core::models::{Counts, Finding, Report};
use crate::core::rules::LintInput;

/// Assemble the report for one linted document
///
/// Size figures are taken from `input`, the score and counts from
/// `findings`. The findings keep their engine order.
#[must_use]
pub fn assemble_report(label: &str, input: &LintInput<'_>, findings: Vec<Finding>) -> Report {
    let score = score(&findings);
    let counts = Counts::tally(&findings);
    Report {
        file: label.to_string(),
        lines: input.line_count(),
        characters: input.char_count(),
        estimated_tokens: input.estimated_tokens(),
        findings,
        score,
        counts,
    }
}

//! Consecutive-run detection
//!
//! Wall-of-text and file-listing detection are the same state machine with
//! a different line predicate and threshold. Both go through
//! [`detect_runs`] so their boundary behavior cannot drift apart.

use crate::core::models::Finding;

/// A maximal block of consecutive lines satisfying a predicate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Run {
    /// 0-based index of the first line
    pub start: usize,
    /// Number of lines in the run
    pub len: usize,
}

impl Run {
    /// 1-based number of the first line
    #[must_use]
    pub const fn first_line(&self) -> usize {
        self.start + 1
    }

    /// 1-based number of the last line
    #[must_use]
    pub const fn last_line(&self) -> usize {
        self.start + self.len
    }
}

/// Report every run of at least `min_len` lines matching `predicate`
///
/// `report` turns each qualifying run into a finding. A run still open at
/// the end of the document is flushed once the loop finishes.
pub fn detect_runs<P, R>(lines: &[&str], min_len: usize, predicate: P, mut report: R) -> Vec<Finding>
where
    P: Fn(&str) -> bool,
    R: FnMut(Run) -> Finding,
{
    let mut findings = Vec::new();
    let mut current: Option<Run> = None;

    for (i, &line) in lines.iter().enumerate() {
        if predicate(line) {
            current.get_or_insert(Run { start: i, len: 0 }).len += 1;
        } else if let Some(run) = current.take()
            && run.len >= min_len
        {
            findings.push(report(run));
        }
    }

    if let Some(run) = current
        && run.len >= min_len
    {
        findings.push(report(run));
    }

    findings
}

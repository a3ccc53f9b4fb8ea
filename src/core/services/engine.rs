//! Lint engine
//!
//! Holds the ordered rule list and runs every rule exactly once over the
//! same input. Findings are concatenated in rule order, each rule's own
//! order preserved, so the output is a pure function of the text.

use super::report::assemble_report;
use crate::core::models::{Finding, Report};
use crate::core::rules::{self, LintInput, Rule};

/// Ordered collection of rules
pub struct Engine {
    rules: Vec<Box<dyn Rule>>,
}

impl Engine {
    /// Engine with every built-in rule
    #[must_use]
    pub fn new() -> Self {
        Self::with_rules(rules::all())
    }

    /// Engine with an explicit rule list
    #[must_use]
    pub fn with_rules(rules: Vec<Box<dyn Rule>>) -> Self {
        Self { rules }
    }

    /// Keep only the rules for which `keep` returns true, preserving order
    #[must_use]
    pub fn retain<F>(mut self, keep: F) -> Self
    where
        F: Fn(&dyn Rule) -> bool,
    {
        self.rules.retain(|rule| {
            let kept = keep(&**rule);
            if !kept {
                log::debug!("rule {} disabled", rule.name());
            }
            kept
        });
        self
    }

    /// The rules in run order
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> {
        self.rules.iter().map(|rule| &**rule)
    }

    /// Run every rule over `input` and concatenate the findings
    #[must_use]
    pub fn run(&self, input: &LintInput<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for rule in &self.rules {
            let produced = rule.check(input);
            log::debug!("{}: {} finding(s)", rule.name(), produced.len());
            findings.extend(produced);
        }
        log::debug!("{} rule(s) produced {} finding(s)", self.rules.len(), findings.len());
        findings
    }

    /// Lint `text` and assemble the report, labelled `label`
    #[must_use]
    pub fn lint(&self, text: &str, label: &str) -> Report {
        let input = LintInput::new(text);
        let findings = self.run(&input);
        assemble_report(label, &input, findings)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("rules", &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>())
            .finish()
    }
}

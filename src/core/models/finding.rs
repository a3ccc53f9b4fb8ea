//! Finding model
//!
//! A finding is what a rule reports: "this rule saw this on that line".
//! Findings are immutable once built; rules assemble them with the
//! constructor for the severity and the `at_line` / `with_suggestion`
//! builders.

use serde::{Deserialize, Serialize};

use super::Severity;

/// A single issue or confirmation produced by a rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Namespaced rule identifier, `"<category>/<name>"`
    pub rule: String,

    /// How serious the finding is
    pub severity: Severity,

    /// Human-readable description
    pub message: String,

    /// 1-based line number, when the finding points at a line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,

    /// Remediation hint (may be a hook configuration snippet)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Whether this finding confirms a check passed
    #[serde(default)]
    pub passed: bool,
}

impl Finding {
    fn new(rule: &str, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            rule: rule.to_string(),
            severity,
            message: message.into(),
            line: None,
            suggestion: None,
            passed: false,
        }
    }

    /// An error-severity finding
    #[must_use]
    pub fn error(rule: &str, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Error, message)
    }

    /// A warning-severity finding
    #[must_use]
    pub fn warning(rule: &str, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Warning, message)
    }

    /// A plain informational finding
    #[must_use]
    pub fn info(rule: &str, message: impl Into<String>) -> Self {
        Self::new(rule, Severity::Info, message)
    }

    /// An info-severity finding confirming the rule passed
    #[must_use]
    pub fn passed(rule: &str, message: impl Into<String>) -> Self {
        Self {
            passed: true,
            ..Self::new(rule, Severity::Info, message)
        }
    }

    /// Attach a 1-based line number
    #[must_use]
    pub const fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    /// Attach a remediation suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// The category portion of the rule identifier (before the first `/`)
    #[must_use]
    pub fn category(&self) -> &str {
        self.rule.split('/').next().unwrap_or_default()
    }

    /// Info-severity finding that is not a pass confirmation
    #[must_use]
    pub fn is_note(&self) -> bool {
        self.severity == Severity::Info && !self.passed
    }
}

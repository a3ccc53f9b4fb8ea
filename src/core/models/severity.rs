//! Finding severity levels
//!
//! Severities classify document quality. They are not program failures.

use serde::{Deserialize, Serialize};

/// Finding severity levels, ordered `Info < Warning < Error`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational note or positive confirmation
    Info,
    /// Costs one point per rule category
    Warning,
    /// Costs two points each and fails the run
    Error,
}

impl Severity {
    /// Lowercase name used in output
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

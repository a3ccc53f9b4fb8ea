//! Lint rules
//!
//! A rule is a named, stateless check over one document. Every rule sees
//! the same [`LintInput`] and returns its own findings; no rule observes
//! another rule's output, and no rule can fail. Not detecting anything is
//! expressed as an empty `Vec`.
//!
//! Rule groups, in engine order:
//!
//! - [`size`] - line, character and token budgets
//! - [`structure`] - headings, walls of text, bullets
//! - [`content`] - vague language, build commands, file inventories, voice
//! - [`hooks`] - instructions better enforced by an automation hook
//! - [`security`] - secrets and destructive commands

pub mod content;
pub mod hooks;
mod runs;
pub mod security;
pub mod size;
pub mod structure;

use std::borrow::Cow;

use super::models::Finding;

pub use runs::{Run, detect_runs};

/// A named unit of analysis over one document
pub trait Rule: Send + Sync {
    /// Namespaced identifier, `"<category>/<name>"`
    fn name(&self) -> &'static str;

    /// One-line description of what the rule looks for
    fn description(&self) -> &'static str;

    /// Examine the document and report findings in line order
    fn check(&self, input: &LintInput<'_>) -> Vec<Finding>;
}

/// The document as every rule sees it: raw text plus its `\n`-split lines
#[derive(Debug, Clone)]
pub struct LintInput<'a> {
    text: &'a str,
    lines: Vec<&'a str>,
}

impl<'a> LintInput<'a> {
    /// Split `text` on `\n`, keeping empty trailing segments
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            lines: text.split('\n').collect(),
        }
    }

    /// The raw document text
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// The document's lines, without their `\n` terminators
    #[must_use]
    pub fn lines(&self) -> &[&'a str] {
        &self.lines
    }

    /// Number of lines (an empty document still has one)
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Number of characters in the document
    #[must_use]
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Characters / 4, rounded half up
    #[must_use]
    pub fn estimated_tokens(&self) -> usize {
        (self.char_count() + 2) / 4
    }
}

/// Every built-in rule, in engine order
#[must_use]
pub fn all() -> Vec<Box<dyn Rule>> {
    let mut rules = size::rules();
    rules.extend(structure::rules());
    rules.extend(content::rules());
    rules.extend(hooks::rules());
    rules.extend(security::rules());
    rules
}

/// Clip `text` to `max` characters, marking the cut with `...`
#[must_use]
pub fn truncate(text: &str, max: usize) -> Cow<'_, str> {
    match text.char_indices().nth(max) {
        Some((cut, _)) => Cow::Owned(format!("{}...", &text[..cut])),
        None => Cow::Borrowed(text),
    }
}

/// Code fence delimiter line (```` ``` ```` with optional info string)
fn is_fence(line: &str) -> bool {
    line.trim().starts_with("```")
}

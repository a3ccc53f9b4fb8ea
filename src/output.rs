//! Output formatting for human and JSON modes
//!
//! Reports and rule listings can be rendered either as human-readable text
//! or machine-parseable JSON. Rendering to a `String` is separate from
//! printing so both modes can be checked without a terminal.

use std::fmt::Write as _;

use colored::{ColoredString, Colorize};
use serde::Serialize;

use crate::VERSION;
use crate::core::models::{Finding, Report, Severity};
use crate::core::rules::Rule;
use crate::core::rules::size::group_thousands;

/// Width of the rule-name column in human output
pub const RULE_COLUMN: usize = 24;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

impl Report {
    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }

    /// Human-readable report text, ending with a blank line
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", format!("claudemd-lint v{VERSION}").bold());
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "  {}",
            format!(
                "{} ({} lines, ~{} tokens)",
                self.file,
                self.lines,
                group_thousands(self.estimated_tokens)
            )
            .dimmed()
        );
        let _ = writeln!(out);

        for finding in self.display_order() {
            let _ = writeln!(out, "{}", format_finding(finding));
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", self.summary());
        let _ = writeln!(out);
        let _ = writeln!(out, "  Score: {}", score_colored(self.score));
        let _ = writeln!(out);
        out
    }

    /// Pretty-printed JSON
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Non-zero counts joined by a middle dot
    fn summary(&self) -> String {
        let counts = &self.counts;
        let mut parts = Vec::new();
        if counts.errors > 0 {
            parts.push(plural(counts.errors, "error").red());
        }
        if counts.warnings > 0 {
            parts.push(plural(counts.warnings, "warning").yellow());
        }
        if counts.passed > 0 {
            parts.push(format!("{} passed", counts.passed).green());
        }
        if counts.info > 0 {
            parts.push(format!("{} info", counts.info).bright_black());
        }
        let separator = " · ".dimmed().to_string();
        parts.iter().map(ToString::to_string).collect::<Vec<_>>().join(&separator)
    }
}

fn plural(n: usize, noun: &str) -> String {
    if n == 1 { format!("{n} {noun}") } else { format!("{n} {noun}s") }
}

fn score_colored(score: u8) -> ColoredString {
    let text = format!("{score}/10");
    match score {
        8.. => text.green(),
        5..=7 => text.yellow(),
        _ => text.red(),
    }
}

/// One finding as a display line, plus its suggestion line if any
#[must_use]
pub fn format_finding(finding: &Finding) -> String {
    let (icon, rule) = match finding.severity {
        Severity::Error => ("✖".red(), finding.rule.red()),
        Severity::Warning => ("⚠".yellow(), finding.rule.yellow()),
        Severity::Info if finding.passed => ("✔".green(), finding.rule.green()),
        Severity::Info => ("ℹ".bright_black(), finding.rule.bright_black()),
    };
    let padding = " ".repeat(RULE_COLUMN.saturating_sub(finding.rule.chars().count()).max(1));
    let mut line = format!("  {icon} {rule}{padding}{}", finding.message);
    if let Some(suggestion) = &finding.suggestion {
        let indent = " ".repeat(2 + RULE_COLUMN);
        let _ = write!(line, "\n  {indent}{}", suggestion.dimmed());
    }
    line
}

/// Message and hint printed when the document does not exist
#[must_use]
pub fn not_found_message(file: &str) -> String {
    format!(
        "\n  {}\n\n{}\n",
        format!("Error: {file} not found.").red(),
        "  Run this command in a directory with a CLAUDE.md file,\n  \
         or specify a path: claudemd-lint path/to/CLAUDE.md"
            .dimmed()
    )
}

/// One entry of the rule listing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleInfo {
    /// Namespaced rule name
    pub name: &'static str,
    /// What the rule looks for
    pub description: &'static str,
}

/// Every rule an engine runs, in run order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleList {
    /// Rules in engine order
    pub rules: Vec<RuleInfo>,
}

impl RuleList {
    /// Collect name and description of each rule
    pub fn from_rules<'a>(rules: impl IntoIterator<Item = &'a dyn Rule>) -> Self {
        Self {
            rules: rules
                .into_iter()
                .map(|rule| RuleInfo {
                    name: rule.name(),
                    description: rule.description(),
                })
                .collect(),
        }
    }

    /// Render the listing based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => print!("{}", self.to_human()),
            OutputMode::Json => println!("{}", serde_json::to_string_pretty(self).unwrap_or_default()),
        }
    }

    /// Human-readable listing, one rule per line
    #[must_use]
    pub fn to_human(&self) -> String {
        let mut out = String::new();
        for info in &self.rules {
            let _ = writeln!(out, "  {:<width$}{}", info.name, info.description, width = RULE_COLUMN);
        }
        out
    }
}

//! Hook suggestion rules
//!
//! Some instructions are policies a model can forget but a hook cannot:
//! protected files, mandatory formatting, forbidden commands. These rules
//! spot such sentences and suggest the equivalent hook configuration.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use super::{LintInput, Rule, truncate};
use crate::core::catalogue::{BLOCKED_COMMANDS, FILE_PROTECTION, FORMATTER};
use crate::core::models::Finding;

/// Rule identifier for file protection
pub const FILE_PROTECTION_RULE: &str = "hooks/file-protection";
/// Rule identifier for formatter enforcement
pub const FORMAT_AFTER_EDIT: &str = "hooks/format-after-edit";
/// Rule identifier for blocked commands
pub const BLOCKED_COMMANDS_RULE: &str = "hooks/blocked-commands";

/// Formatter suggested when the sentence does not name one
pub const DEFAULT_FORMATTER: &str = "prettier";

const QUOTE_LEN: usize = 60;

static QUOTES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"[`"']"#).expect("quote pattern is valid"));
static DETERMINERS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:the|a|an|any|all|this|that|those|these)\b").expect("determiner pattern is valid")
});
static GENERIC_NOUNS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:file|files|directory|directories|folder|folders)\b").expect("noun pattern is valid")
});

/// Hook suggestion rules, in engine order
#[must_use]
pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(FileProtection), Box::new(FormatAfterEdit), Box::new(BlockedCommands)]
}

/// Runs `patterns` over every line; the first match on a line yields one finding
fn scan_lines<F>(input: &LintInput<'_>, patterns: &[Regex], rule: &str, suggest: F) -> Vec<Finding>
where
    F: Fn(&Captures<'_>) -> String,
{
    let mut findings = Vec::new();
    for (i, line) in input.lines().iter().enumerate() {
        let Some(caps) = patterns.iter().find_map(|re| re.captures(line)) else {
            continue;
        };
        findings.push(
            Finding::warning(
                rule,
                format!("Line {}: \"{}\" should be a hook:", i + 1, truncate(line.trim(), QUOTE_LEN)),
            )
            .at_line(i + 1)
            .with_suggestion(suggest(&caps)),
        );
    }
    findings
}

/// Best-effort single-token target from a captured phrase
///
/// Quotes, determiners and words like "file" are dropped, then the first
/// remaining token wins: `the src/config.ts file.` yields `src/config.ts`.
/// Returns `None` when nothing but filler words remain.
#[must_use]
pub fn extract_target(phrase: &str) -> Option<String> {
    let cleaned = QUOTES.replace_all(phrase, "");
    let cleaned = DETERMINERS.replace_all(&cleaned, "");
    let cleaned = GENERIC_NOUNS.replace_all(&cleaned, "");
    let cleaned = cleaned.trim_end_matches(['.', ',', ';', '!']);
    cleaned.split_whitespace().next().map(str::to_string)
}

/// "Never modify X" should be a pre-execution guard on X
#[derive(Debug, Clone, Copy, Default)]
pub struct FileProtection;

impl Rule for FileProtection {
    fn name(&self) -> &'static str {
        FILE_PROTECTION_RULE
    }

    fn description(&self) -> &'static str {
        "\"Never modify X\" should be a PreToolUse hook"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        scan_lines(input, &FILE_PROTECTION, FILE_PROTECTION_RULE, |caps| {
            let target = caps.get(1).and_then(|m| extract_target(m.as_str()));
            match target {
                Some(target) => format!(
                    r#"{{ "type": "PreToolUse", "matcher": "Edit|Write", "command": "if echo $FILE | grep -q '{target}'; then exit 1; fi" }}"#
                ),
                None => r#"{ "type": "PreToolUse", "matcher": "Edit|Write", "command": "..." }"#
                    .to_string(),
            }
        })
    }
}

/// "Always run the formatter" should be a post-execution hook
#[derive(Debug, Clone, Copy, Default)]
pub struct FormatAfterEdit;

impl Rule for FormatAfterEdit {
    fn name(&self) -> &'static str {
        FORMAT_AFTER_EDIT
    }

    fn description(&self) -> &'static str {
        "\"Always run formatter\" should be a PostToolUse hook"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        scan_lines(input, &FORMATTER, FORMAT_AFTER_EDIT, |caps| {
            let formatter = caps.get(1).map_or(DEFAULT_FORMATTER, |m| m.as_str()).to_lowercase();
            format!(
                r#"{{ "type": "PostToolUse", "matcher": "Edit|Write", "command": "{formatter} --write $FILE" }}"#
            )
        })
    }
}

/// "Never run X" should be a pre-execution rejection
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockedCommands;

impl Rule for BlockedCommands {
    fn name(&self) -> &'static str {
        BLOCKED_COMMANDS_RULE
    }

    fn description(&self) -> &'static str {
        "\"Never run X\" should be a PreToolUse hook"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        scan_lines(input, &BLOCKED_COMMANDS, BLOCKED_COMMANDS_RULE, |_| {
            r##"{ "type": "PreToolUse", "matcher": "Bash", "command": "# reject the specific command pattern" }"##
                .to_string()
        })
    }
}

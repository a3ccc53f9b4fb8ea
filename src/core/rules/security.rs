//! Security rules
//!
//! Instruction files are committed and shared, so anything secret-shaped
//! in them is treated as a leak.

use super::{LintInput, Rule, is_fence};
use crate::core::catalogue::{DANGEROUS_COMMANDS, LabeledPattern, SECRETS};
use crate::core::models::Finding;

/// Rule identifier for secret detection
pub const NO_SECRETS: &str = "security/no-secrets";
/// Rule identifier for dangerous command detection
pub const NO_DANGEROUS_COMMANDS: &str = "security/no-dangerous-commands";

/// Security rules, in engine order
#[must_use]
pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(NoSecrets), Box::new(NoDangerousCommands)]
}

/// First pattern matching `line`, in catalogue order
fn first_match<'p>(patterns: &'p [LabeledPattern], line: &str) -> Option<&'p LabeledPattern> {
    patterns.iter().find(|p| p.regex.is_match(line))
}

/// One error per secret-bearing line; confirms when the document is clean
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSecrets;

impl Rule for NoSecrets {
    fn name(&self) -> &'static str {
        NO_SECRETS
    }

    fn description(&self) -> &'static str {
        "Detect API keys, tokens, passwords"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        let findings: Vec<Finding> = input
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| !is_fence(line))
            .filter_map(|(i, line)| {
                let secret = first_match(&SECRETS, line)?;
                Some(
                    Finding::error(
                        NO_SECRETS,
                        format!(
                            "Line {}: Possible {} detected. Never put secrets in CLAUDE.md.",
                            i + 1,
                            secret.label
                        ),
                    )
                    .at_line(i + 1),
                )
            })
            .collect();

        if findings.is_empty() {
            return vec![Finding::passed(NO_SECRETS, "No secrets detected.")];
        }
        findings
    }
}

/// One error per line containing a destructive command
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDangerousCommands;

impl Rule for NoDangerousCommands {
    fn name(&self) -> &'static str {
        NO_DANGEROUS_COMMANDS
    }

    fn description(&self) -> &'static str {
        "Detect dangerous commands in examples"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        input
            .lines()
            .iter()
            .enumerate()
            .filter_map(|(i, line)| {
                let command = first_match(&DANGEROUS_COMMANDS, line)?;
                Some(
                    Finding::error(
                        NO_DANGEROUS_COMMANDS,
                        format!(
                            "Line {}: Dangerous command \"{}\" found. Remove or replace with a \
                             safer alternative.",
                            i + 1,
                            command.label
                        ),
                    )
                    .at_line(i + 1),
                )
            })
            .collect()
    }
}

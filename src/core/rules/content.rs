//! Content quality rules
//!
//! Heuristics over the wording of the instructions: vague phrases, missing
//! verification commands, file inventories and descriptive voice.

use super::{LintInput, Rule, detect_runs, is_fence, truncate};
use crate::core::catalogue::{
    BULLET_MARKER, BUILD_COMMANDS, DESCRIPTIVE_OPENERS, FILE_LISTING, VAGUE_PHRASES,
};
use crate::core::models::Finding;

/// Rule identifier for vague language
pub const NO_VAGUE_LANGUAGE: &str = "content/no-vague-language";
/// Rule identifier for build command presence
pub const HAS_BUILD_COMMANDS: &str = "content/has-build-commands";
/// Rule identifier for file inventories
pub const NO_FILE_LISTING: &str = "content/no-file-listing";
/// Rule identifier for imperative voice
pub const USES_IMPERATIVES: &str = "content/uses-imperatives";

/// Consecutive file-description bullets that count as an inventory
pub const FILE_LISTING_RUN: usize = 8;

/// Longest quoted excerpt in an imperative-voice finding
const QUOTE_LEN: usize = 50;

/// Content rules, in engine order
#[must_use]
pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NoVagueLanguage),
        Box::new(HasBuildCommands),
        Box::new(NoFileListing),
        Box::new(UsesImperatives),
    ]
}

/// At most one warning per line containing a vague phrase
#[derive(Debug, Clone, Copy, Default)]
pub struct NoVagueLanguage;

impl Rule for NoVagueLanguage {
    fn name(&self) -> &'static str {
        NO_VAGUE_LANGUAGE
    }

    fn description(&self) -> &'static str {
        "Detect vague language like \"properly\", \"best practices\""
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        input
            .lines()
            .iter()
            .enumerate()
            .filter(|(_, line)| !is_fence(line))
            .filter_map(|(i, line)| {
                let phrase = VAGUE_PHRASES.iter().find(|p| p.regex.is_match(line))?;
                Some(
                    Finding::warning(
                        NO_VAGUE_LANGUAGE,
                        format!(
                            "Line {}: \"{}\" is too vague and gets deprioritised.",
                            i + 1,
                            phrase.label
                        ),
                    )
                    .at_line(i + 1)
                    .with_suggestion("Replace with a specific, actionable instruction."),
                )
            })
            .collect()
    }
}

/// Warns when no build, test or lint command appears anywhere
#[derive(Debug, Clone, Copy, Default)]
pub struct HasBuildCommands;

impl Rule for HasBuildCommands {
    fn name(&self) -> &'static str {
        HAS_BUILD_COMMANDS
    }

    fn description(&self) -> &'static str {
        "Should include build/test/lint commands"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        if BUILD_COMMANDS.iter().any(|re| re.is_match(input.text())) {
            return Vec::new();
        }
        vec![Finding::warning(
            HAS_BUILD_COMMANDS,
            "No build/test/lint commands found. Include them so changes can be verified.",
        )]
    }
}

/// Flags [`FILE_LISTING_RUN`] or more consecutive file-description bullets
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFileListing;

impl Rule for NoFileListing {
    fn name(&self) -> &'static str {
        NO_FILE_LISTING
    }

    fn description(&self) -> &'static str {
        "Detect exhaustive file-by-file descriptions"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        detect_runs(
            input.lines(),
            FILE_LISTING_RUN,
            |line| FILE_LISTING.is_match(line.trim()),
            |run| {
                Finding::warning(
                    NO_FILE_LISTING,
                    format!(
                        "Lines {}-{}: {} consecutive file descriptions. The codebase is readable \
                         directly, focus on conventions, not inventory.",
                        run.first_line(),
                        run.last_line(),
                        run.len
                    ),
                )
                .at_line(run.first_line())
            },
        )
    }
}

/// Notes prose lines written descriptively instead of as instructions
#[derive(Debug, Clone, Copy, Default)]
pub struct UsesImperatives;

impl Rule for UsesImperatives {
    fn name(&self) -> &'static str {
        USES_IMPERATIVES
    }

    fn description(&self) -> &'static str {
        "Instructions should be imperative voice"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (i, line) in input.lines().iter().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with(['#', '-', '*', '>', '`']) {
                continue;
            }
            let unbulleted = BULLET_MARKER.find(trimmed).map_or(trimmed, |m| &trimmed[m.end()..]);

            let opener = DESCRIPTIVE_OPENERS
                .iter()
                .find(|p| p.regex.is_match(trimmed) || p.regex.is_match(unbulleted));
            if let Some(opener) = opener {
                findings.push(
                    Finding::info(
                        USES_IMPERATIVES,
                        format!("Line {}: \"{}\"", i + 1, truncate(trimmed, QUOTE_LEN)),
                    )
                    .at_line(i + 1)
                    .with_suggestion(opener.label),
                );
            }
        }
        findings
    }
}

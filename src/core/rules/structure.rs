//! Structure rules
//!
//! Headings and bullets are recognised by their line prefix only; no
//! markdown tree is built.

use super::{LintInput, Rule, detect_runs};
use crate::core::catalogue::{BULLET, HEADING, NUMBERED_ITEM};
use crate::core::models::Finding;

/// Rule identifier for heading presence
pub const HAS_HEADINGS: &str = "structure/has-headings";
/// Rule identifier for wall-of-text detection
pub const NO_WALL_OF_TEXT: &str = "structure/no-wall-of-text";
/// Rule identifier for bullet usage
pub const USES_BULLETS: &str = "structure/uses-bullets";

/// Longest run of unstructured lines that is still acceptable
pub const MAX_PROSE_LINES: usize = 5;

/// Structure rules, in engine order
#[must_use]
pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(HasHeadings), Box::new(NoWallOfText), Box::new(UsesBullets)]
}

/// Requires at least one markdown heading
#[derive(Debug, Clone, Copy, Default)]
pub struct HasHeadings;

impl Rule for HasHeadings {
    fn name(&self) -> &'static str {
        HAS_HEADINGS
    }

    fn description(&self) -> &'static str {
        "Must have at least one ## heading"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        let count = input.lines().iter().filter(|l| HEADING.is_match(l)).count();
        let finding = match count {
            0 => Finding::error(
                HAS_HEADINGS,
                "No headings found. Use ## headings to organise rules into sections.",
            ),
            1 => Finding::passed(HAS_HEADINGS, "Has 1 heading."),
            n => Finding::passed(HAS_HEADINGS, format!("Has {n} headings.")),
        };
        vec![finding]
    }
}

/// Flags more than [`MAX_PROSE_LINES`] consecutive unstructured lines
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWallOfText;

impl Rule for NoWallOfText {
    fn name(&self) -> &'static str {
        NO_WALL_OF_TEXT
    }

    fn description(&self) -> &'static str {
        "No paragraphs >5 lines without structure"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        detect_runs(
            input.lines(),
            MAX_PROSE_LINES + 1,
            |line| !is_structured(line),
            |run| {
                Finding::warning(
                    NO_WALL_OF_TEXT,
                    format!(
                        "Lines {}-{}: {}-line wall of text. Break it up with bullets or headings.",
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

/// Blank, heading, bullet, quote, numbered item or code fence
fn is_structured(line: &str) -> bool {
    let line = line.trim();
    line.is_empty()
        || line.starts_with(['#', '-', '*', '>'])
        || line.starts_with("```")
        || NUMBERED_ITEM.is_match(line)
}

/// Recommends bullets when the document has none
#[derive(Debug, Clone, Copy, Default)]
pub struct UsesBullets;

impl Rule for UsesBullets {
    fn name(&self) -> &'static str {
        USES_BULLETS
    }

    fn description(&self) -> &'static str {
        "Rules should use bullet points for compliance"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        if input.lines().iter().any(|l| BULLET.is_match(l)) {
            return Vec::new();
        }
        vec![Finding::info(
            USES_BULLETS,
            "No bullet points found. Bulleted rules get ~35% higher compliance than prose.",
        )]
    }
}

//! Size budget rules
//!
//! Shorter, denser instruction files are followed more reliably. Lines,
//! characters and estimated tokens are budgeted independently because a
//! document can blow one budget without the others.

use super::{LintInput, Rule};
use crate::core::models::{Finding, Severity};

/// Rule identifier for the line budget
pub const LINES: &str = "size/lines";
/// Rule identifier for the character budget
pub const CHARACTERS: &str = "size/characters";
/// Rule identifier for the token budget
pub const ESTIMATED_TOKENS: &str = "size/estimated-tokens";

/// A warning threshold and an error threshold; both are exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Budget {
    /// Values above this warn
    pub warn_above: usize,
    /// Values above this are errors
    pub error_above: usize,
}

impl Budget {
    /// Severity of `value` against this budget, `None` when within it
    #[must_use]
    pub const fn classify(self, value: usize) -> Option<Severity> {
        if value > self.error_above {
            Some(Severity::Error)
        } else if value > self.warn_above {
            Some(Severity::Warning)
        } else {
            None
        }
    }
}

/// Line budget
pub const LINE_BUDGET: Budget = Budget {
    warn_above: 100,
    error_above: 200,
};

/// Character budget (5KB / 10KB)
pub const CHARACTER_BUDGET: Budget = Budget {
    warn_above: 5120,
    error_above: 10240,
};

/// Estimated token budget
pub const TOKEN_BUDGET: Budget = Budget {
    warn_above: 1000,
    error_above: 2000,
};

/// Size rules, in engine order
#[must_use]
pub fn rules() -> Vec<Box<dyn Rule>> {
    vec![Box::new(LineCount), Box::new(CharacterCount), Box::new(EstimatedTokens)]
}

/// Line count against [`LINE_BUDGET`]; confirms when within budget
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCount;

impl Rule for LineCount {
    fn name(&self) -> &'static str {
        LINES
    }

    fn description(&self) -> &'static str {
        "Check total line count"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        let count = input.line_count();
        let finding = match LINE_BUDGET.classify(count) {
            Some(Severity::Error) => Finding::error(
                LINES,
                format!("File is {count} lines (max 200). Rules beyond ~150 lines get ignored."),
            ),
            Some(_) => Finding::warning(
                LINES,
                format!("File is {count} lines. Consider trimming to <100 for best results."),
            ),
            None => Finding::passed(LINES, format!("{count} lines, good length.")),
        };
        vec![finding]
    }
}

/// Character count against [`CHARACTER_BUDGET`]; silent when within budget
#[derive(Debug, Clone, Copy, Default)]
pub struct CharacterCount;

impl Rule for CharacterCount {
    fn name(&self) -> &'static str {
        CHARACTERS
    }

    fn description(&self) -> &'static str {
        "Check total character count"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        let count = input.char_count();
        let kb = kilobytes(count);
        match CHARACTER_BUDGET.classify(count) {
            Some(Severity::Error) => vec![Finding::error(
                CHARACTERS,
                format!("File is {kb}KB (max 10KB). Large files dilute important rules."),
            )],
            Some(_) => vec![Finding::warning(
                CHARACTERS,
                format!("File is {kb}KB. Aim for <5KB to keep rules focused."),
            )],
            None => Vec::new(),
        }
    }
}

/// Estimated tokens against [`TOKEN_BUDGET`]; silent when within budget
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedTokens;

impl Rule for EstimatedTokens {
    fn name(&self) -> &'static str {
        ESTIMATED_TOKENS
    }

    fn description(&self) -> &'static str {
        "Estimate token count (chars / 4)"
    }

    fn check(&self, input: &LintInput<'_>) -> Vec<Finding> {
        let tokens = input.estimated_tokens();
        let shown = group_thousands(tokens);
        match TOKEN_BUDGET.classify(tokens) {
            Some(Severity::Error) => vec![Finding::error(
                ESTIMATED_TOKENS,
                format!("~{shown} tokens. This eats into context, aim for <1,000."),
            )],
            Some(_) => vec![Finding::warning(
                ESTIMATED_TOKENS,
                format!("~{shown} tokens. Aim for <1,000 to leave room for context."),
            )],
            None => Vec::new(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn kilobytes(chars: usize) -> String {
    format!("{:.1}", chars as f64 / 1024.0)
}

/// `1234567` -> `"1,234,567"`
#[must_use]
pub fn group_thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

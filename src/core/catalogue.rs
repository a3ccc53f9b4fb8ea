//! Pattern catalogue
//!
//! Every textual signature the rules match against, grouped by the rule
//! group that owns it. Patterns are compiled once on first use and never
//! mutated afterwards, so rules can share them freely. The patterns are
//! fixed data; one that fails to compile is a bug and panics on first use.
//!
//! `Regex` matching is stateless per call; no cursor has to be reset
//! between lines.

use std::sync::LazyLock;

use regex::Regex;

/// A compiled pattern with the label reported when it matches
#[derive(Debug)]
pub struct LabeledPattern {
    /// What the match is reported as
    pub label: &'static str,
    /// The compiled expression
    pub regex: Regex,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("catalogue pattern is valid")
}

fn compile_all(patterns: &[&str]) -> Vec<Regex> {
    patterns.iter().map(|p| compile(p)).collect()
}

fn compile_labeled(patterns: &[(&'static str, &str)]) -> Vec<LabeledPattern> {
    patterns
        .iter()
        .map(|&(label, p)| LabeledPattern { label, regex: compile(p) })
        .collect()
}

// =============================================================================
// Structure
// =============================================================================

/// Markdown heading: 1-6 `#` followed by whitespace
pub static HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"^#{1,6}\s"));

/// Bullet item, possibly indented
pub static BULLET: LazyLock<Regex> = LazyLock::new(|| compile(r"^\s*[-*]\s"));

/// Leading bullet marker on an already trimmed line
pub static BULLET_MARKER: LazyLock<Regex> = LazyLock::new(|| compile(r"^[-*]\s+"));

/// Numbered list item on a trimmed line
pub static NUMBERED_ITEM: LazyLock<Regex> = LazyLock::new(|| compile(r"^\d+\."));

// =============================================================================
// Content
// =============================================================================

/// Vague phrases; the label is what the finding quotes
pub static VAGUE_PHRASES: LazyLock<Vec<LabeledPattern>> = LazyLock::new(|| {
    compile_labeled(&[
        ("properly", r"(?i)\bproperly\b"),
        ("best practices", r"(?i)\bbest practices?\b"),
        ("clean code", r"(?i)\bclean code\b"),
        ("be careful", r"(?i)\bbe careful\b"),
        ("as appropriate", r"(?i)\bas appropriate\b"),
        ("when necessary", r"(?i)\bwhen necessary\b"),
        ("if needed", r"(?i)\bif needed\b"),
        ("good practices", r"(?i)\bgood practices?\b"),
        ("make sure", r"(?i)\bmake sure\b"),
        ("try to", r"(?i)\btry to\b"),
    ])
});

/// Build, test and lint invocations across common toolchains
pub static BUILD_COMMANDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"\bnpm (?:run )?(?:build|test|lint)\b",
        r"\byarn (?:run )?(?:build|test|lint)\b",
        r"\bpnpm (?:run )?(?:build|test|lint)\b",
        r"\bbun (?:run )?(?:build|test|lint)\b",
        r"\bmake\b",
        r"\bcargo (?:build|test|clippy)\b",
        r"\bgo (?:build|test|vet)\b",
        r"\bpytest\b",
        r"\bgradle\b",
        r"\bmvn\b",
    ])
});

/// A bullet naming one source file, optionally followed by a description
pub static FILE_LISTING: LazyLock<Regex> = LazyLock::new(|| {
    compile(
        r"^[-*]\s+`[^`]+\.(?:ts|js|py|rs|go|java|tsx|jsx|css|html|json|yaml|yml|toml)`\s*(?:[-–—:]|$)",
    )
});

/// Descriptive sentence openers; the label is the rewrite suggestion
pub static DESCRIPTIVE_OPENERS: LazyLock<Vec<LabeledPattern>> = LazyLock::new(|| {
    compile_labeled(&[
        (
            "Rewrite as an imperative instruction",
            r"(?i)^(?:the|this|our|my)\s+(?:project|app|codebase|repo|system)\s+(?:uses?|is|has)\b",
        ),
        (
            "Rewrite as an imperative: \"Use X\" instead of \"We use X\"",
            r"(?i)^we\s+(?:use|prefer|like|want|need)\b",
        ),
    ])
});

// =============================================================================
// Hooks
// =============================================================================

/// "Never modify X" phrasings; capture 1 is the protected target
pub static FILE_PROTECTION: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)\b(?:never|don'?t|do not|must not|should not|shouldn'?t)\s+(?:modify|edit|touch|change|update|delete|remove|alter)\s+(.+)",
        r"(?i)\b(?:do not|don'?t|never)\s+(?:write to|overwrite)\s+(.+)",
        r"(?i)\b(.+?)\s+(?:is|are)\s+(?:read[- ]?only|immutable|off[- ]?limits)\b",
    ])
});

/// "Always run the formatter" phrasings; capture 1, when present, is the formatter
pub static FORMATTER: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)\b(?:always|must|should)\s+run\s+(prettier|eslint|biome|dprint|gofmt|rustfmt|black|autopep8|clang-format)\b",
        r"(?i)\b(?:always|must|should)\s+(?:format|lint)\s+(?:after|before|when)\b",
        r"(?i)\brun\s+(prettier|eslint|biome|dprint)\s+(?:after|on|before)\s+(?:every|each|all)?\s*(?:edit|change|save|write)\b",
    ])
});

/// "Never run X" phrasings and literally named forbidden invocations
pub static BLOCKED_COMMANDS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    compile_all(&[
        r"(?i)\b(?:never|don'?t|do not|must not)\s+(?:run|use|execute)\s+(.+)",
        r"(?i)\b(?:never|don'?t|do not)\s+(?:force[- ]?push|rm\s+-rf|sudo)\b",
        r"(?i)\b(?:forbidden|banned|prohibited|blocked)\s*(?:commands?)?\s*:\s*(.+)",
    ])
});

// =============================================================================
// Security
// =============================================================================

/// Secret token shapes; the label names the secret category
pub static SECRETS: LazyLock<Vec<LabeledPattern>> = LazyLock::new(|| {
    compile_labeled(&[
        ("API key", r"\b(?:sk|pk)[-_](?:live|test|prod)[-_][a-zA-Z0-9]{20,}"),
        ("GitHub personal access token", r"\bghp_[a-zA-Z0-9]{36,}\b"),
        ("GitHub OAuth token", r"\bgho_[a-zA-Z0-9]{36,}\b"),
        ("GitHub app token", r"\bghs_[a-zA-Z0-9]{36,}\b"),
        ("Slack bot token", r"\bxoxb-[0-9]+-[a-zA-Z0-9]+"),
        ("Slack user token", r"\bxoxp-[0-9]+-[a-zA-Z0-9]+"),
        ("AWS access key", r"\bAKIA[0-9A-Z]{16}\b"),
        ("hardcoded password", r#"(?i)(?:password|passwd|pwd)\s*[:=]\s*["'][^"']{8,}["']"#),
        (
            "hardcoded API key",
            r#"(?i)(?:api[_-]?key|apikey|secret[_-]?key)\s*[:=]\s*["'][^"']{8,}["']"#,
        ),
        ("JWT token", r"\bey[A-Za-z0-9_-]{20,}\.[A-Za-z0-9_-]{20,}\.[A-Za-z0-9_-]{20,}\b"),
    ])
});

/// Destructive shell command shapes; the label names the command
pub static DANGEROUS_COMMANDS: LazyLock<Vec<LabeledPattern>> = LazyLock::new(|| {
    compile_labeled(&[
        ("rm -rf /", r"\brm\s+-rf\s+/(?:\s|$)"),
        ("rm -rf ~", r"\brm\s+-rf\s+~(?:\s|$)"),
        ("curl | bash", r"\bcurl\s+.*\|\s*(?:sudo\s+)?(?:ba)?sh\b"),
        ("wget | bash", r"\bwget\s+.*\|\s*(?:sudo\s+)?(?:ba)?sh\b"),
        ("fork bomb", r":\(\)\s*\{\s*:\|:&\s*\}\s*;?\s*:"),
        ("dd to disk device", r"\bdd\s+.*of=/dev/[sh]d[a-z]\b"),
        ("mkfs (format disk)", r"\bmkfs\b"),
        ("chmod -R 777 /", r"\bchmod\s+-R\s+777\s+/"),
    ])
});

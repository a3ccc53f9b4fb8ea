//! List the built-in rules

use std::process::ExitCode;

use claudemd_lint::Engine;
use claudemd_lint::output::{OutputMode, RuleList};

/// Print every rule in engine order
pub fn rules(mode: OutputMode) -> ExitCode {
    let engine = Engine::new();
    RuleList::from_rules(engine.rules()).render(mode);
    ExitCode::SUCCESS
}

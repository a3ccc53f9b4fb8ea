//! Linting services
//!
//! Pure orchestration over the rule catalogue. These services have no
//! I/O dependencies - they operate on the text passed in and return values.
//!
//! - [`engine`] - Run every rule over one document
//! - [`scorer`] - Reduce findings to a 0-10 score
//! - [`report`] - Assemble the final report

pub mod engine;
pub mod report;
pub mod scorer;

pub use engine::Engine;
pub use report::assemble_report;
pub use scorer::score;

use super::models::Report;

/// Lint `text` with every built-in rule
#[must_use]
pub fn lint(text: &str, label: &str) -> Report {
    Engine::new().lint(text, label)
}

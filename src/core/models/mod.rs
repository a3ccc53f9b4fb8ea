//! Domain models for claudemd-lint
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Severity`] - How serious a finding is
//! - [`Finding`] - One issue (or confirmation) reported by a rule
//! - [`Report`] - Everything one lint pass produced

mod finding;
mod report;
mod severity;

pub use finding::Finding;
pub use report::{Counts, Report};
pub use severity::Severity;

//! claudemd-lint - A linter for CLAUDE.md instruction files
//!
//! This library runs a fixed catalogue of static checks over a single
//! instruction document and reduces the findings to a 0-10 quality score.
//!
//! ```
//! let report = claudemd_lint::lint("# Rules\n- Run `cargo test` before committing\n", "CLAUDE.md");
//! assert_eq!(report.counts.errors, 0);
//! assert!(report.score <= 10);
//! ```

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod core;
pub mod output;
pub mod source;

pub use crate::core::services::{Engine, lint};

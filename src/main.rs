//! claudemd-lint - Lint CLAUDE.md instruction files
//!
//! Checks one instruction document for size, structure, content, hook and
//! security problems, prints the findings and a 0-10 score, and exits
//! non-zero when any error-severity finding was produced.

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

use std::process::ExitCode;

mod cli;

/// Exit status for configuration and I/O failures
const EXIT_USAGE: u8 = 2;

/// Main entry point for the claudemd-lint CLI
fn main() -> ExitCode {
    match cli::run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::from(EXIT_USAGE)
        },
    }
}

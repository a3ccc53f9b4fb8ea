//! Core domain logic for claudemd-lint
//!
//! This module contains pure linting logic with no I/O dependencies.
//! Reading files, configuration and rendering live outside of it.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Severity, Finding, Report)
//! - `catalogue` - Process-wide detection patterns
//! - `rules/` - The `Rule` trait and the five rule groups
//! - `services/` - Engine, scorer and report assembly

pub mod catalogue;
pub mod models;
pub mod rules;
pub mod services;

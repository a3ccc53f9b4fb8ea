//! Command implementations

mod lint;
mod rules;

pub use lint::lint;
pub use rules::rules;

//! Per-file lint engine: parse, extract declarations, run the rule.

pub mod linter;

pub use linter::{FileReport, Linter};

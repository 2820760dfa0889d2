//! Configuration system for rxlint.
//! Rule options from the lint-runner array surface, plus an optional
//! `rxlint.toml` project file with an environment override layer.

pub mod lint_config;
pub mod rule_options;

pub use lint_config::{LintConfig, RuleConfig, RulesConfig};
pub use rule_options::RuleOptions;

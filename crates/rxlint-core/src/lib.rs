//! rxlint-core: shared building blocks for the rxlint rule engine.
//!
//! - `constants`: rule name, option flags, environment variable names
//! - `config`: rule options and the `rxlint.toml` configuration file
//! - `errors`: one error enum per subsystem, `thiserror` only
//! - `tracing`: subscriber setup driven by `RXLINT_LOG`

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::{LintConfig, RuleConfig, RuleOptions};
pub use errors::{ConfigError, LintError, ParseError, RxlintErrorCode};

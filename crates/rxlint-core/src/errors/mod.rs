//! Error handling for rxlint.
//! One error enum per subsystem, `thiserror` only.
//!
//! The rule itself never fails; errors only come from the edges
//! (parsing source text, loading configuration).

pub mod config_error;
pub mod error_code;
pub mod lint_error;
pub mod parse_error;

pub use config_error::ConfigError;
pub use error_code::RxlintErrorCode;
pub use lint_error::LintError;
pub use parse_error::ParseError;

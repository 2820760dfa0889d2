//! Top-level lint error, aggregating subsystem errors via `From` conversions.

use super::error_code::RxlintErrorCode;
use super::{ConfigError, ParseError};

#[derive(Debug, thiserror::Error)]
pub enum LintError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl RxlintErrorCode for LintError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Parse(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

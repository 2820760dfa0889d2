//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, RxlintErrorCode};

/// Errors that can occur while turning source text into declarations.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Grammar could not be loaded for {language}: {message}")]
    GrammarLoad { language: String, message: String },

    #[error("Tree-sitter produced no tree for {path}")]
    NoTree { path: PathBuf },

    #[error("Unsupported language: {extension}")]
    UnsupportedLanguage { extension: String },
}

impl RxlintErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage { .. } => error_code::UNSUPPORTED_LANGUAGE,
            _ => error_code::PARSE_ERROR,
        }
    }
}

//! Tests for the rxlint error types.

use std::path::PathBuf;

use rxlint_core::errors::*;

#[test]
fn test_error_codes() {
    let parse = ParseError::NoTree {
        path: PathBuf::from("a.ts"),
    };
    assert_eq!(parse.error_code(), "PARSE_ERROR");

    let unsupported = ParseError::UnsupportedLanguage {
        extension: "py".into(),
    };
    assert_eq!(unsupported.error_code(), "UNSUPPORTED_LANGUAGE");

    let config = ConfigError::FileNotReadable {
        path: "/tmp/rxlint.toml".into(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_from_conversions_keep_codes() {
    let lint: LintError = ParseError::UnsupportedLanguage {
        extension: "py".into(),
    }
    .into();
    assert!(matches!(lint, LintError::Parse(_)));
    assert_eq!(lint.error_code(), "UNSUPPORTED_LANGUAGE");

    let lint: LintError = ConfigError::InvalidValue {
        field: "options".into(),
        message: "bad".into(),
    }
    .into();
    assert!(matches!(lint, LintError::Config(_)));
    assert_eq!(lint.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_host_string_format() {
    let err = ParseError::UnsupportedLanguage {
        extension: "rb".into(),
    };
    assert_eq!(err.host_string(), "[UNSUPPORTED_LANGUAGE] Unsupported language: rb");
}

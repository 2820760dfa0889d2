//! Tests for the rxlint configuration system.

use std::sync::Mutex;

use serde_json::json;

use rxlint_core::config::{LintConfig, RuleConfig, RuleOptions};
use rxlint_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

#[test]
fn test_defaults_without_config_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::remove_var("RXLINT_ALLOW_PUBLIC");

    let dir = tempdir();
    let config = LintConfig::load(dir.path()).unwrap();
    assert!(config.subject_rule_enabled());
    assert_eq!(config.subject_options(), RuleOptions::default());
}

#[test]
fn test_project_file_is_read() {
    let _lock = ENV_MUTEX.lock().unwrap();
    std::env::remove_var("RXLINT_ALLOW_PUBLIC");

    let dir = tempdir();
    std::fs::write(
        dir.path().join("rxlint.toml"),
        r#"
[rules.rx-subject-restrictions]
options = ["allow-public"]
"#,
    )
    .unwrap();

    let config = LintConfig::load(dir.path()).unwrap();
    assert!(config.subject_rule_enabled());
    assert!(config.subject_options().allow_public);
}

#[test]
fn test_env_override_beats_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("rxlint.toml"),
        "[rules.rx-subject-restrictions]\noptions = [\"allow-public\"]\n",
    )
    .unwrap();

    std::env::set_var("RXLINT_ALLOW_PUBLIC", "false");
    let config = LintConfig::load(dir.path()).unwrap();
    std::env::remove_var("RXLINT_ALLOW_PUBLIC");

    assert!(!config.subject_options().allow_public);
}

#[test]
fn test_invalid_env_override_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();

    let dir = tempdir();
    std::env::set_var("RXLINT_ALLOW_PUBLIC", "maybe");
    let config = LintConfig::load(dir.path()).unwrap();
    std::env::remove_var("RXLINT_ALLOW_PUBLIC");

    assert!(!config.subject_options().allow_public);
}

#[test]
fn test_malformed_toml_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();

    let dir = tempdir();
    std::fs::write(dir.path().join("rxlint.toml"), "[rules\nbroken").unwrap();

    let err = LintConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
}

#[test]
fn test_disabled_rule_from_toml() {
    let config = LintConfig::from_toml(
        "[rules.rx-subject-restrictions]\nenabled = false\n",
    )
    .unwrap();
    assert!(!config.subject_rule_enabled());
}

#[test]
fn test_unknown_keys_are_tolerated() {
    let config = LintConfig::from_toml(
        r#"
[rules.rx-subject-restrictions]
options = ["allow-public", "future-flag"]

[rules.some-other-rule]
enabled = true
"#,
    )
    .unwrap();
    assert!(config.subject_options().allow_public);
}

#[test]
fn test_rule_config_from_json_shapes() {
    let enabled = RuleConfig::from_json(&json!(true)).unwrap();
    assert!(enabled.enabled);
    assert!(!enabled.rule_options().allow_public);

    let disabled = RuleConfig::from_json(&json!(false)).unwrap();
    assert!(!disabled.enabled);

    let with_flag = RuleConfig::from_json(&json!([true, "allow-public"])).unwrap();
    assert!(with_flag.enabled);
    assert!(with_flag.rule_options().allow_public);

    let bare_array = RuleConfig::from_json(&json!(["allow-public"])).unwrap();
    assert!(bare_array.enabled);
    assert!(bare_array.rule_options().allow_public);

    let object = RuleConfig::from_json(&json!({ "options": ["allow-public"] })).unwrap();
    assert!(object.enabled);
    assert!(object.rule_options().allow_public);

    let off = RuleConfig::from_json(&json!({ "severity": "off" })).unwrap();
    assert!(!off.enabled);

    let absent = RuleConfig::from_json(&json!(null)).unwrap();
    assert_eq!(absent, RuleConfig::default());
}

#[test]
fn test_rule_config_ignores_non_string_flags() {
    let config = RuleConfig::from_json(&json!([true, 42, "allow-public", null])).unwrap();
    assert_eq!(config.options, vec!["allow-public".to_string()]);
}

#[test]
fn test_rule_config_rejects_wrong_shapes() {
    let err = RuleConfig::from_json(&json!(3)).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));

    let err = RuleConfig::from_json(&json!({ "options": 7 })).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "options"));
}

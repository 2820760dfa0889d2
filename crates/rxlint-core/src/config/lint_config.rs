//! Top-level rxlint configuration.
//!
//! Resolution order (highest priority first):
//! 1. Environment variables (`RXLINT_*`)
//! 2. Project config (`rxlint.toml` in the project root)
//! 3. Compiled defaults

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::RuleOptions;
use crate::constants::{ALLOW_PUBLIC_ENV_VAR, CONFIG_FILE_NAME};
use crate::errors::ConfigError;

/// Per-rule configuration as written in `rxlint.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuleConfig {
    /// Whether the rule runs at all. Default: true.
    pub enabled: bool,
    /// Option flags, e.g. `["allow-public"]`.
    pub options: Vec<String>,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            options: Vec::new(),
        }
    }
}

impl RuleConfig {
    /// Resolved options for this rule.
    pub fn rule_options(&self) -> RuleOptions {
        RuleOptions::from_flags(&self.options)
    }

    /// Parse the JSON shapes lint runners use for a rule entry:
    /// `true`, `false`, `[true, "allow-public"]`, `["allow-public"]`,
    /// or `{ "options": [...], "severity": "..." }`.
    pub fn from_json(value: &Value) -> Result<Self, ConfigError> {
        match value {
            Value::Null => Ok(Self::default()),
            Value::Bool(enabled) => Ok(Self {
                enabled: *enabled,
                options: Vec::new(),
            }),
            Value::Array(items) => {
                let (enabled, flags) = match items.split_first() {
                    Some((Value::Bool(enabled), rest)) => (*enabled, rest),
                    _ => (true, items.as_slice()),
                };
                Ok(Self {
                    enabled,
                    options: string_flags(flags),
                })
            }
            Value::Object(map) => {
                let enabled = !matches!(
                    map.get("severity").and_then(Value::as_str),
                    Some("off" | "none")
                );
                let options = match map.get("options") {
                    None | Some(Value::Null) => Vec::new(),
                    Some(Value::Array(items)) => string_flags(items),
                    Some(Value::String(flag)) => vec![flag.clone()],
                    Some(other) => {
                        return Err(ConfigError::InvalidValue {
                            field: "options".to_string(),
                            message: format!("expected an array of strings, got {other}"),
                        })
                    }
                };
                Ok(Self { enabled, options })
            }
            other => Err(ConfigError::InvalidValue {
                field: "rule".to_string(),
                message: format!("expected a boolean, array or object, got {other}"),
            }),
        }
    }
}

fn string_flags(items: &[Value]) -> Vec<String> {
    items
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect()
}

/// The `[rules]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    #[serde(rename = "rx-subject-restrictions")]
    pub subject_restrictions: RuleConfig,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfig {
    pub rules: RulesConfig,
}

impl LintConfig {
    /// Load configuration for the project rooted at `root`.
    ///
    /// A missing `rxlint.toml` yields the defaults. An unreadable or
    /// malformed file is an error.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join(CONFIG_FILE_NAME);
        let mut config = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|_| {
                ConfigError::FileNotReadable {
                    path: path.display().to_string(),
                }
            })?;
            Self::parse_toml(&content, &path.display().to_string())?
        } else {
            tracing::debug!(path = %path.display(), "no project config, using defaults");
            Self::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Self::parse_toml(toml_str, "<string>")
    }

    fn parse_toml(toml_str: &str, path: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `RXLINT_*` environment overrides. Unparseable values are
    /// logged and ignored.
    pub fn apply_env_overrides(&mut self) {
        let Ok(raw) = std::env::var(ALLOW_PUBLIC_ENV_VAR) else {
            return;
        };
        let rule = &mut self.rules.subject_restrictions;
        let mut options = rule.rule_options();
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => options.allow_public = true,
            "0" | "false" | "no" => options.allow_public = false,
            _ => {
                tracing::warn!(var = ALLOW_PUBLIC_ENV_VAR, value = %raw, "ignoring invalid override");
                return;
            }
        }
        rule.options = options.to_flags();
    }

    /// Options for the Subject rule.
    pub fn subject_options(&self) -> RuleOptions {
        self.rules.subject_restrictions.rule_options()
    }

    /// Whether the Subject rule is enabled.
    pub fn subject_rule_enabled(&self) -> bool {
        self.rules.subject_restrictions.enabled
    }
}

//! Shared constants for the rxlint engine.

/// Name under which the Subject rule is registered and configured.
pub const RULE_NAME: &str = "rx-subject-restrictions";

/// The only recognized rule option flag.
pub const ALLOW_PUBLIC: &str = "allow-public";

/// Project configuration file name, looked up in the project root.
pub const CONFIG_FILE_NAME: &str = "rxlint.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "RXLINT_LOG";

/// Fallback tracing filter when `RXLINT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "rxlint=info";

/// Environment override for the `allow-public` option.
pub const ALLOW_PUBLIC_ENV_VAR: &str = "RXLINT_ALLOW_PUBLIC";

//! Options for the `rx-subject-restrictions` rule.

use serde::{Deserialize, Serialize};

use crate::constants::ALLOW_PUBLIC;

/// Resolved rule options.
///
/// The external surface is an array of string flags whose only recognized
/// element is `"allow-public"`. Absent flag means a public Subject property
/// is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuleOptions {
    pub allow_public: bool,
}

impl RuleOptions {
    /// Options with `allow-public` set.
    pub fn allowing_public() -> Self {
        Self { allow_public: true }
    }

    /// Build options from a list of flags. Unrecognized flags are ignored
    /// so newer configs keep working with older engines.
    pub fn from_flags<I, S>(flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Self::default();
        for flag in flags {
            match flag.as_ref() {
                ALLOW_PUBLIC => options.allow_public = true,
                other => tracing::debug!(flag = other, "ignoring unrecognized rule option"),
            }
        }
        options
    }

    /// The flag list equivalent of these options.
    pub fn to_flags(&self) -> Vec<String> {
        if self.allow_public {
            vec![ALLOW_PUBLIC.to_string()]
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_disallows_public() {
        assert!(!RuleOptions::default().allow_public);
        assert!(!RuleOptions::from_flags(Vec::<String>::new()).allow_public);
    }

    #[test]
    fn allow_public_flag_is_recognized() {
        assert!(RuleOptions::from_flags(["allow-public"]).allow_public);
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let options = RuleOptions::from_flags(["allow-private", "ALLOW-PUBLIC", "allow-public "]);
        assert_eq!(options, RuleOptions::default());

        let options = RuleOptions::from_flags(["something-new", "allow-public"]);
        assert!(options.allow_public);
    }

    #[test]
    fn flags_round_trip() {
        assert_eq!(RuleOptions::allowing_public().to_flags(), vec!["allow-public"]);
        assert!(RuleOptions::default().to_flags().is_empty());
    }
}

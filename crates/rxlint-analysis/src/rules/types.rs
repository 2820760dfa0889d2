//! Core types for the rule: findings, metadata, and the `Rule` trait.

use std::fmt;

use serde::Serialize;
use smallvec::SmallVec;

use crate::classifier::Classified;
use crate::declaration::{PropertyDeclaration, Range};

/// Findings from a single policy. A policy yields at most two.
pub type Findings = SmallVec<[Finding; 2]>;

/// The three diagnostics this rule can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FindingKind {
    NoModifier,
    PublicNotAllowed,
    NamingFailure,
}

impl FindingKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::NoModifier => "RxJS Subject must have access modifier",
            Self::PublicNotAllowed => "Public access modifier for RxJS Subject is not allowed",
            Self::NamingFailure => "The name of RxJS Subject variable must ends with \"$\"",
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Self::NoModifier => "NO_MODIFIER",
            Self::PublicNotAllowed => "PUBLIC_NOT_ALLOWED",
            Self::NamingFailure => "NAMING_FAILURE",
        }
    }
}

impl fmt::Display for FindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A single diagnostic anchored to a property declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub rule: &'static str,
    pub kind: FindingKind,
    pub message: &'static str,
    /// Name of the offending property, when it has one.
    pub declaration: Option<String>,
    /// The restricted constructor that triggered the rule.
    pub restricted_type: Option<&'static str>,
    pub range: Range,
}

impl Finding {
    pub(crate) fn at(kind: FindingKind, classified: &Classified<'_>) -> Self {
        let decl = classified.declaration();
        Self {
            rule: rxlint_core::constants::RULE_NAME,
            kind,
            message: kind.message(),
            declaration: decl.name.clone(),
            restricted_type: classified.restricted_type(),
            range: decl.range,
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} {} ({})",
            self.range.start.line, self.range.start.column, self.message, self.rule
        )
    }
}

/// Descriptive metadata a host shows for a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RuleMetadata {
    pub name: &'static str,
    pub description: &'static str,
    pub rationale: &'static str,
    pub options_description: &'static str,
    /// Example option arrays, as JSON text.
    pub option_examples: &'static [&'static str],
    pub typescript_only: bool,
    pub has_fix: bool,
}

/// A rule evaluated once per class property declaration.
pub trait Rule: Send + Sync {
    fn metadata(&self) -> &RuleMetadata;

    fn check(&self, declaration: &PropertyDeclaration) -> Vec<Finding>;
}

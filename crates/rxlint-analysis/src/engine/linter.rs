//! Linter: owns the front end and the configured rule.

use std::path::Path;

use rxlint_core::errors::LintError;
use rxlint_core::{LintConfig, RuleOptions};
use serde::Serialize;

use crate::declaration::PropertyDeclaration;
use crate::parsers::TypeScriptFrontend;
use crate::rules::{Finding, Rule, SubjectRestrictionsRule};

/// Result of linting one file.
#[derive(Debug, Clone, Default, Serialize)]
pub struct FileReport {
    pub file: String,
    /// Findings in source order.
    pub findings: Vec<Finding>,
    pub declarations_checked: usize,
    pub parse_errors: u32,
}

impl FileReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

pub struct Linter {
    frontend: TypeScriptFrontend,
    rule: SubjectRestrictionsRule,
    enabled: bool,
}

impl Linter {
    /// Build a linter from resolved configuration.
    pub fn new(config: &LintConfig) -> Result<Self, LintError> {
        Ok(Self {
            frontend: TypeScriptFrontend::new()?,
            rule: SubjectRestrictionsRule::new(config.subject_options()),
            enabled: config.subject_rule_enabled(),
        })
    }

    /// Build an enabled linter with explicit options.
    pub fn with_options(options: RuleOptions) -> Result<Self, LintError> {
        Ok(Self {
            frontend: TypeScriptFrontend::new()?,
            rule: SubjectRestrictionsRule::new(options),
            enabled: true,
        })
    }

    pub fn rule(&self) -> &SubjectRestrictionsRule {
        &self.rule
    }

    /// Lint one source file. A disabled rule returns an empty report
    /// without parsing.
    pub fn lint_source(&mut self, path: &Path, source: &str) -> Result<FileReport, LintError> {
        let file = path.display().to_string();
        if !self.enabled {
            tracing::debug!(file = %file, "rule disabled, skipping");
            return Ok(FileReport {
                file,
                ..FileReport::default()
            });
        }

        let extracted = self.frontend.extract(path, source)?;
        let findings = self.lint_declarations(&extracted.declarations);

        tracing::debug!(
            file = %file,
            declarations = extracted.declarations.len(),
            findings = findings.len(),
            "linted file"
        );

        Ok(FileReport {
            file,
            findings,
            declarations_checked: extracted.declarations.len(),
            parse_errors: extracted.error_count,
        })
    }

    /// Run the rule over declarations supplied by a host, in order.
    pub fn lint_declarations(&self, declarations: &[PropertyDeclaration]) -> Vec<Finding> {
        if !self.enabled {
            return Vec::new();
        }
        declarations
            .iter()
            .flat_map(|decl| self.rule.check(decl))
            .collect()
    }
}

//! Entry point: classify once, then run both policies independently.

use rxlint_core::constants::RULE_NAME;
use rxlint_core::RuleOptions;

use super::naming::check_naming;
use super::types::{Finding, Rule, RuleMetadata};
use super::visibility::check_visibility;
use crate::classifier::classify;
use crate::declaration::PropertyDeclaration;

pub const METADATA: RuleMetadata = RuleMetadata {
    name: RULE_NAME,
    description: "Strict access modifier and naming for RxJS Subjects",
    rationale: "Suffixing observable property names with \"$\" tells other developers the \
                property is an Observable. Keeping Subjects non-public stops callers from \
                pushing values into a stream they should only observe.",
    options_description: "Restricts the access modifiers of Subject properties. With no option, \
                          Subjects must be private, protected or static. Pass \"allow-public\" \
                          to permit public Subjects.",
    option_examples: &["true", "[true, \"allow-public\"]"],
    typescript_only: false,
    has_fix: false,
};

/// Check one declaration. Visibility findings come first, then naming.
pub fn check(declaration: &PropertyDeclaration, options: &RuleOptions) -> Vec<Finding> {
    let classified = classify(declaration);
    let mut findings: Vec<Finding> = check_visibility(&classified, options).into_vec();
    findings.extend(check_naming(&classified));

    for finding in &findings {
        tracing::trace!(
            kind = finding.kind.code(),
            line = finding.range.start.line,
            name = finding.declaration.as_deref().unwrap_or("<unnamed>"),
            "finding"
        );
    }
    findings
}

/// The rule bound to its resolved options.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubjectRestrictionsRule {
    options: RuleOptions,
}

impl SubjectRestrictionsRule {
    pub fn new(options: RuleOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &RuleOptions {
        &self.options
    }
}

impl Rule for SubjectRestrictionsRule {
    fn metadata(&self) -> &RuleMetadata {
        &METADATA
    }

    fn check(&self, declaration: &PropertyDeclaration) -> Vec<Finding> {
        check(declaration, &self.options)
    }
}

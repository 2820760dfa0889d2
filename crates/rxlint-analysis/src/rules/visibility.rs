//! Visibility policy: a Subject property must be private, protected or
//! static, unless `allow-public` permits an explicit `public`.

use rxlint_core::RuleOptions;

use super::types::{Finding, FindingKind, Findings};
use crate::classifier::Classified;
use crate::declaration::Modifier;

pub fn check_visibility(classified: &Classified<'_>, options: &RuleOptions) -> Findings {
    let mut findings = Findings::new();
    if !classified.is_restricted() || options.allow_public {
        return findings;
    }

    let modifiers = &classified.declaration().modifiers;
    if modifiers.is_empty() {
        findings.push(Finding::at(FindingKind::NoModifier, classified));
    }
    if modifiers.contains(Modifier::Public) {
        findings.push(Finding::at(FindingKind::PublicNotAllowed, classified));
    }
    findings
}

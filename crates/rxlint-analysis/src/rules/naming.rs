//! Naming policy: a Subject property's name must end with `$`.

use super::types::{Finding, FindingKind, Findings};
use crate::classifier::Classified;

const OBSERVABLE_SUFFIX: char = '$';

/// Declarations without an identifiable name are skipped.
pub fn check_naming(classified: &Classified<'_>) -> Findings {
    let mut findings = Findings::new();
    if !classified.is_restricted() {
        return findings;
    }

    match classified.declaration().name.as_deref() {
        Some(name) if !name.is_empty() && !name.ends_with(OBSERVABLE_SUFFIX) => {
            findings.push(Finding::at(FindingKind::NamingFailure, classified));
        }
        _ => {}
    }
    findings
}

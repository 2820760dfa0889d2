//! The `rx-subject-restrictions` rule: visibility and naming policies for
//! Subject-valued class properties.

pub mod naming;
pub mod subject_restrictions;
pub mod types;
pub mod visibility;

pub use naming::check_naming;
pub use subject_restrictions::{check, SubjectRestrictionsRule};
pub use types::{Finding, FindingKind, Findings, Rule, RuleMetadata};
pub use visibility::check_visibility;

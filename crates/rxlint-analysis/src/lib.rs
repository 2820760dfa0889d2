//! rxlint-analysis: the `rx-subject-restrictions` rule.
//!
//! Flags class properties that construct RxJS Subjects when they are public
//! (or carry no access modifier) or when their name does not end in `$`.
//!
//! - `declaration`: the host-independent property declaration model
//! - `classifier`: decides whether a declaration constructs a Subject
//! - `rules`: visibility and naming policies plus the rule entry point
//! - `parsers`: tree-sitter front end producing declarations from source
//! - `engine`: per-file linting over parsed source

pub mod classifier;
pub mod declaration;
pub mod engine;
pub mod parsers;
pub mod rules;

pub use classifier::{classify, is_restricted_type, Classified, RESTRICTED_TYPES};
pub use declaration::{Initializer, Modifier, Modifiers, Position, PropertyDeclaration, Range};
pub use engine::{FileReport, Linter};
pub use parsers::{ExtractedFile, SourceLanguage, TypeScriptFrontend};
pub use rules::{check, Finding, FindingKind, Rule, RuleMetadata, SubjectRestrictionsRule};

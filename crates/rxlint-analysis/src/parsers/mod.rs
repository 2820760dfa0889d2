//! Tree-sitter front end: TypeScript, TSX and JavaScript source to
//! property declarations.

pub mod language;
pub mod typescript;

pub use language::SourceLanguage;
pub use typescript::{ExtractedFile, TypeScriptFrontend};

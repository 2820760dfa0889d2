//! Property declaration model handed to the rule by a host.
//!
//! A host (the bundled tree-sitter front end or any other parser) builds one
//! `PropertyDeclaration` per class property and passes it to the rule.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Access or storage modifier attached to a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    Public,
    Protected,
    Private,
    Static,
}

impl Modifier {
    /// Map a source keyword to a modifier. Other keywords (`readonly`,
    /// `declare`, `override`, ...) are not modifiers for this rule.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "public" => Some(Self::Public),
            "protected" => Some(Self::Protected),
            "private" => Some(Self::Private),
            "static" => Some(Self::Static),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Protected => "protected",
            Self::Private => "private",
            Self::Static => "static",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Set of modifiers present on a declaration, in source order, no duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers(SmallVec<[Modifier; 2]>);

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, modifier: Modifier) {
        if !self.contains(modifier) {
            self.0.push(modifier);
        }
    }

    pub fn contains(&self, modifier: Modifier) -> bool {
        self.0.contains(&modifier)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = Modifier> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Modifier> for Modifiers {
    fn from_iter<I: IntoIterator<Item = Modifier>>(iter: I) -> Self {
        let mut modifiers = Self::new();
        for modifier in iter {
            modifiers.insert(modifier);
        }
        modifiers
    }
}

/// What the host knows about a property's initializer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Initializer {
    /// `new Callee(...)`, with the callee expression text (e.g. `Rx.Subject`).
    Construct { callee: String, text: String },
    /// Any other expression.
    Expression { text: String },
    /// The declaration has no initializer.
    Absent,
    /// No structural information; classification falls back to the
    /// declaration's source text.
    #[default]
    Unknown,
}

/// 1-based source position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start: Position::new(start_line, start_col),
            end: Position::new(end_line, end_col),
        }
    }
}

/// A class property declaration under test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDeclaration {
    /// Full source text of the declaration.
    pub text: String,
    /// Identifier name. `None` for computed, string or numeric names.
    pub name: Option<String>,
    pub modifiers: Modifiers,
    pub initializer: Initializer,
    /// Type name resolved by a host with type information, if any.
    pub resolved_type: Option<String>,
    pub range: Range,
}

impl PropertyDeclaration {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_modifiers<I: IntoIterator<Item = Modifier>>(mut self, modifiers: I) -> Self {
        self.modifiers = modifiers.into_iter().collect();
        self
    }

    pub fn with_initializer(mut self, initializer: Initializer) -> Self {
        self.initializer = initializer;
        self
    }

    pub fn with_resolved_type(mut self, resolved_type: impl Into<String>) -> Self {
        self.resolved_type = Some(resolved_type.into());
        self
    }

    pub fn with_range(mut self, range: Range) -> Self {
        self.range = range;
        self
    }
}

//! TypeScript/JavaScript front end using native tree-sitter.
//!
//! Walks every class body in the file and turns each field definition into
//! a `PropertyDeclaration`, in source order.

use std::path::Path;

use rxlint_core::errors::ParseError;
use tree_sitter::{Node, Parser};

use super::language::SourceLanguage;
use crate::declaration::{Initializer, Modifier, Modifiers, PropertyDeclaration, Range};

/// TS uses `public_field_definition`, JS uses `field_definition`.
const FIELD_KINDS: [&str; 2] = ["public_field_definition", "field_definition"];

/// Expression wrappers looked through when finding a `new` expression.
const TRANSPARENT_KINDS: [&str; 5] = [
    "parenthesized_expression",
    "as_expression",
    "satisfies_expression",
    "non_null_expression",
    "type_assertion",
];

/// Declarations extracted from one file.
#[derive(Debug, Clone)]
pub struct ExtractedFile {
    pub language: SourceLanguage,
    pub declarations: Vec<PropertyDeclaration>,
    /// ERROR and MISSING nodes in the tree. Extraction still runs on the
    /// well-formed parts.
    pub error_count: u32,
}

/// One parser per grammar, created up front. Not shared across threads.
pub struct TypeScriptFrontend {
    typescript: Parser,
    tsx: Parser,
    javascript: Parser,
}

impl TypeScriptFrontend {
    pub fn new() -> Result<Self, ParseError> {
        Ok(Self {
            typescript: parser_for(SourceLanguage::TypeScript)?,
            tsx: parser_for(SourceLanguage::Tsx)?,
            javascript: parser_for(SourceLanguage::JavaScript)?,
        })
    }

    /// Parse `source` (language picked from `path`) and extract its class
    /// property declarations.
    pub fn extract(&mut self, path: &Path, source: &str) -> Result<ExtractedFile, ParseError> {
        let language = SourceLanguage::from_path(path)?;
        let parser = match language {
            SourceLanguage::TypeScript => &mut self.typescript,
            SourceLanguage::Tsx => &mut self.tsx,
            SourceLanguage::JavaScript => &mut self.javascript,
        };

        let tree = parser.parse(source, None).ok_or_else(|| ParseError::NoTree {
            path: path.to_path_buf(),
        })?;

        let bytes = source.as_bytes();
        let mut declarations = Vec::new();
        let mut error_count = 0u32;

        let mut cursor = tree.root_node().walk();
        loop {
            let node = cursor.node();
            if node.is_error() || node.is_missing() {
                error_count += 1;
            }
            if FIELD_KINDS.contains(&node.kind()) {
                declarations.push(declaration_from_node(node, bytes));
            }

            if cursor.goto_first_child() {
                continue;
            }
            let mut done = false;
            while !cursor.goto_next_sibling() {
                if !cursor.goto_parent() {
                    done = true;
                    break;
                }
            }
            if done {
                break;
            }
        }

        tracing::debug!(
            path = %path.display(),
            language = language.name(),
            declarations = declarations.len(),
            error_count,
            "extracted class properties"
        );

        Ok(ExtractedFile {
            language,
            declarations,
            error_count,
        })
    }
}

fn parser_for(language: SourceLanguage) -> Result<Parser, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&language.grammar())
        .map_err(|e| ParseError::GrammarLoad {
            language: language.name().to_string(),
            message: e.to_string(),
        })?;
    Ok(parser)
}

fn node_text<'a>(node: Node<'_>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or_default()
}

fn range_of(node: Node<'_>) -> Range {
    let start = node.start_position();
    let end = node.end_position();
    Range::new(
        start.row as u32 + 1,
        start.column as u32 + 1,
        end.row as u32 + 1,
        end.column as u32 + 1,
    )
}

fn declaration_from_node(node: Node<'_>, source: &[u8]) -> PropertyDeclaration {
    PropertyDeclaration {
        text: node_text(node, source).to_string(),
        name: property_name(node, source),
        modifiers: modifiers_of(node, source),
        initializer: initializer_of(node, source),
        resolved_type: None,
        range: range_of(node),
    }
}

fn modifiers_of(node: Node<'_>, source: &[u8]) -> Modifiers {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .filter_map(|child| match child.kind() {
            "accessibility_modifier" => Modifier::from_keyword(node_text(child, source).trim()),
            "static" => Some(Modifier::Static),
            _ => None,
        })
        .collect()
}

fn property_name(node: Node<'_>, source: &[u8]) -> Option<String> {
    let name = node
        .child_by_field_name("name")
        .or_else(|| node.child_by_field_name("property"))?;
    match name.kind() {
        "property_identifier" | "private_property_identifier" => {
            Some(node_text(name, source).to_string())
        }
        "string" => Some(unquote(node_text(name, source)).to_string()),
        _ => None,
    }
}

fn unquote(text: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = text
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    text
}

/// The wrapped expression. `<T>expr` puts the type first, so take the last
/// named child there.
fn unwrap_once(expr: Node<'_>) -> Option<Node<'_>> {
    if expr.kind() == "type_assertion" {
        expr.named_child(expr.named_child_count().checked_sub(1)?)
    } else {
        expr.named_child(0)
    }
}

fn initializer_of(node: Node<'_>, source: &[u8]) -> Initializer {
    let Some(value) = node.child_by_field_name("value") else {
        return Initializer::Absent;
    };

    let mut expr = value;
    while TRANSPARENT_KINDS.contains(&expr.kind()) {
        match unwrap_once(expr) {
            Some(inner) => expr = inner,
            None => break,
        }
    }

    let text = node_text(value, source).to_string();
    if expr.kind() == "new_expression" {
        if let Some(callee) = expr.child_by_field_name("constructor") {
            return Initializer::Construct {
                callee: node_text(callee, source).to_string(),
                text,
            };
        }
    }
    Initializer::Expression { text }
}

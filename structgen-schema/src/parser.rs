//! TypeScript declaration parser.
//!
//! This module loads declaration files and parses them into a range-annotated
//! syntax tree. Every node keeps its byte range into the original text, so
//! later stages can slice type expressions verbatim instead of printing them
//! back from the tree.

use crate::error::ParseError;
use crate::types::{Location, Span};
use std::path::Path;
use tree_sitter::{Language, Node, Parser, Tree};

/// Reads a declaration file as plain text.
///
/// # Errors
/// Returns the underlying IO error if the file is missing, unreadable or not
/// valid UTF-8.
pub fn load_source(path: &Path) -> std::io::Result<String> {
    std::fs::read_to_string(path)
}

/// Parsed declaration file: the raw text plus its syntax tree.
pub struct SourceDocument {
    text: String,
    tree: Tree,
}

impl SourceDocument {
    /// Parses declaration source text.
    ///
    /// # Errors
    /// Returns `ParseError` if the grammar cannot be loaded or the text
    /// contains syntax errors.
    pub fn parse(text: impl Into<String>) -> Result<Self, ParseError> {
        let text = text.into();
        let tree = parse_tree(&text)?;
        Ok(Self { text, tree })
    }

    /// Returns the original source text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the root node of the syntax tree.
    #[must_use]
    pub fn root(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Returns the source text covered by a node.
    #[must_use]
    pub fn node_text(&self, node: &Node<'_>) -> &str {
        Span::of(node).slice(&self.text)
    }
}

impl std::fmt::Debug for SourceDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceDocument")
            .field("len", &self.text.len())
            .field("root", &self.tree.root_node().kind())
            .finish()
    }
}

fn typescript() -> Language {
    tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into()
}

/// Parses text into a syntax tree, rejecting any error or missing node.
fn parse_tree(text: &str) -> Result<Tree, ParseError> {
    let mut parser = Parser::new();
    parser
        .set_language(&typescript())
        .map_err(|e| ParseError::language(e.to_string()))?;

    let tree = parser.parse(text, None).ok_or(ParseError::Aborted)?;
    if let Some(node) = first_error(tree.root_node()) {
        return Err(syntax_error(&node, text));
    }

    Ok(tree)
}

/// Finds the first error or missing node in document order.
fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }

    let mut cursor = node.walk();
    for child in node.children(&mut cursor) {
        if let Some(found) = first_error(child) {
            return Some(found);
        }
    }
    None
}

fn syntax_error(node: &Node<'_>, text: &str) -> ParseError {
    let location = Location::of(node);
    if node.is_missing() {
        return ParseError::syntax(location, format!("missing `{}`", node.kind()));
    }

    let snippet: String = Span::of(node)
        .slice(text)
        .lines()
        .next()
        .unwrap_or_default()
        .chars()
        .take(40)
        .collect();
    if snippet.trim().is_empty() {
        ParseError::syntax(location, "unexpected input")
    } else {
        ParseError::syntax(location, format!("unexpected `{}`", snippet.trim()))
    }
}

//! Interface and struct method location.
//!
//! The generated declaration file contains one exported class modelling the
//! on-chain contract. Struct-accepting methods are recognised by a name
//! suffix; only plain method members count (fields and accessors are
//! ignored), and their source order is preserved.

use crate::error::SchemaError;
use crate::parser::SourceDocument;
use crate::types::{SchemaOptions, Span};
use tree_sitter::Node;

/// The exported class representing the on-chain interface.
#[derive(Debug, Clone, Copy)]
pub struct InterfaceDeclaration<'a> {
    /// Class declaration node.
    pub node: Node<'a>,
    /// Class body node.
    pub body: Node<'a>,
}

impl<'a> InterfaceDeclaration<'a> {
    /// Returns the declared class name, if the class is named.
    #[must_use]
    pub fn name(&self, document: &'a SourceDocument) -> Option<&'a str> {
        self.node
            .child_by_field_name("name")
            .map(|name| document.node_text(&name))
    }
}

/// A class member whose name carries the struct suffix.
#[derive(Debug, Clone)]
pub struct StructMethod<'a> {
    /// Full method name as declared (e.g. `DrawStruct`).
    pub name: String,
    /// Method name with the suffix stripped (e.g. `Draw`).
    pub kind: String,
    /// Method member node.
    pub node: Node<'a>,
}

impl StructMethod<'_> {
    /// Returns the byte range of the method member.
    #[must_use]
    pub fn span(&self) -> Span {
        Span::of(&self.node)
    }
}

/// Locates the first exported class declaration.
///
/// # Errors
/// Returns `SchemaError::NoInterface` if the document exports no class.
pub fn locate_interface(document: &SourceDocument) -> Result<InterfaceDeclaration<'_>, SchemaError> {
    let root = document.root();
    let mut cursor = root.walk();

    let class = root
        .named_children(&mut cursor)
        .find_map(exported_class)
        .ok_or(SchemaError::NoInterface)?;
    let body = class
        .child_by_field_name("body")
        .ok_or(SchemaError::NoInterface)?;

    Ok(InterfaceDeclaration { node: class, body })
}

/// Returns the struct methods of an interface in declaration order.
#[must_use]
pub fn locate_struct_methods<'a>(
    document: &'a SourceDocument,
    interface: &InterfaceDeclaration<'a>,
    options: &SchemaOptions,
) -> Vec<StructMethod<'a>> {
    let mut methods = Vec::new();
    let mut cursor = interface.body.walk();

    for member in interface.body.named_children(&mut cursor) {
        if !is_method(&member) || is_accessor(&member) {
            continue;
        }
        let Some(name_node) = member.child_by_field_name("name") else {
            continue;
        };
        if name_node.kind() != "property_identifier" {
            continue;
        }

        let name = document.node_text(&name_node);
        if let Some(kind) = options.kind_of(name) {
            tracing::debug!("Located struct method {} at byte {}", name, member.start_byte());
            methods.push(StructMethod {
                name: name.to_string(),
                kind: kind.to_string(),
                node: member,
            });
        }
    }

    methods
}

/// Unwraps `export [declare] [abstract] class` statements.
fn exported_class(node: Node<'_>) -> Option<Node<'_>> {
    if node.kind() != "export_statement" {
        return None;
    }
    node.child_by_field_name("declaration").and_then(class_of)
}

fn class_of(node: Node<'_>) -> Option<Node<'_>> {
    match node.kind() {
        "class_declaration" | "abstract_class_declaration" => Some(node),
        "ambient_declaration" => {
            let mut cursor = node.walk();
            node.named_children(&mut cursor).find_map(class_of)
        }
        _ => None,
    }
}

fn is_method(member: &Node<'_>) -> bool {
    matches!(
        member.kind(),
        "method_signature" | "method_definition" | "abstract_method_signature"
    )
}

fn is_accessor(member: &Node<'_>) -> bool {
    let mut cursor = member.walk();
    member
        .children(&mut cursor)
        .any(|child| !child.is_named() && matches!(child.kind(), "get" | "set"))
}

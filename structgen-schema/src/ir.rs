//! Intermediate representation for code generation.
//!
//! The registry is the explicit list of struct kinds found in a declaration
//! file, each mapped to its field schema. The method-name suffix is only used
//! to build it; code generation and the ABI-encoding consumer work from the
//! registry alone.

use crate::error::SchemaError;
use crate::extract::extract_struct;
use crate::locator::{locate_interface, locate_struct_methods};
use crate::parser::SourceDocument;
use crate::types::{FieldSpec, SchemaOptions};
use crate::validation::validate_registry;
use serde::Serialize;

/// Field schema of one struct kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StructDescriptor {
    /// Struct kind, also the generated class name and discriminant value.
    pub kind: String,
    /// Contract method the kind was detected from (e.g. `DrawStruct`).
    pub source_method: String,
    /// Caller-supplied fields in declaration order.
    pub fields: Vec<FieldSpec>,
    /// Whether the source literal declares the discriminant property.
    pub has_discriminant: bool,
    /// Type literal text usable as a class body.
    #[serde(skip)]
    pub body: String,
}

impl StructDescriptor {
    /// Returns the field with the given name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Returns the field names in declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }
}

/// All struct kinds declared by an interface, in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StructRegistry {
    /// Name of the interface class the kinds were read from.
    pub interface: String,
    /// Property name of the discriminant field.
    pub discriminant: String,
    /// Struct descriptors in declaration order.
    pub structs: Vec<StructDescriptor>,
}

impl StructRegistry {
    /// Builds the registry from a parsed declaration file.
    ///
    /// # Errors
    /// Returns `SchemaError` if the interface is missing, a struct method has
    /// no inline struct parameter, or validation fails. The first error
    /// aborts the whole build.
    pub fn from_document(
        document: &SourceDocument,
        options: &SchemaOptions,
    ) -> Result<Self, SchemaError> {
        let interface = locate_interface(document)?;
        let mut registry = Self {
            interface: interface.name(document).unwrap_or_default().to_string(),
            discriminant: options.discriminant.clone(),
            structs: Vec::new(),
        };

        for method in locate_struct_methods(document, &interface, options) {
            if method.kind.is_empty() {
                return Err(SchemaError::EmptyKind {
                    method: method.name,
                });
            }

            let shape = extract_struct(document, &method, options)?;
            registry.structs.push(StructDescriptor {
                body: shape.class_body(document.text()),
                kind: method.kind,
                source_method: method.name,
                fields: shape.fields,
                has_discriminant: shape.has_discriminant,
            });
        }

        validate_registry(&registry)?;
        tracing::debug!(
            "Interface {} declares {} struct kinds",
            registry.interface,
            registry.structs.len()
        );

        Ok(registry)
    }

    /// Gets a struct by kind.
    #[must_use]
    pub fn get(&self, kind: &str) -> Option<&StructDescriptor> {
        self.structs.iter().find(|s| s.kind == kind)
    }

    /// Gets a struct by the contract method it was detected from.
    #[must_use]
    pub fn get_by_method(&self, method: &str) -> Option<&StructDescriptor> {
        self.structs.iter().find(|s| s.source_method == method)
    }

    /// Resolves an ABI-encoding lookup key.
    ///
    /// Encoding call sites key structs either by kind (`Draw`) or by contract
    /// method (`DrawStruct`); both are accepted.
    #[must_use]
    pub fn resolve(&self, key: &str) -> Option<&StructDescriptor> {
        self.get(key).or_else(|| self.get_by_method(key))
    }

    /// Returns the struct kinds in declaration order.
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.structs.iter().map(|s| s.kind.as_str())
    }

    /// Returns the number of struct kinds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.structs.len()
    }

    /// Returns true if no struct kinds were found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty()
    }
}

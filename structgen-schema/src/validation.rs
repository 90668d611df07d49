//! Struct registry validation.
//!
//! These checks reject registries whose generated classes could not compile:
//! duplicate kinds (overloaded struct methods), duplicate or reserved field
//! names.

use crate::error::SchemaError;
use crate::ir::{StructDescriptor, StructRegistry};
use std::collections::HashSet;

/// Validates a struct registry.
///
/// # Errors
/// Returns `SchemaError` describing the first problem found.
pub fn validate_registry(registry: &StructRegistry) -> Result<(), SchemaError> {
    let mut seen_kinds = HashSet::new();

    for descriptor in &registry.structs {
        if !seen_kinds.insert(descriptor.kind.as_str()) {
            return Err(SchemaError::DuplicateKind {
                kind: descriptor.kind.clone(),
            });
        }
        validate_fields(registry, descriptor)?;
    }

    Ok(())
}

/// Validates the fields of one struct.
fn validate_fields(
    registry: &StructRegistry,
    descriptor: &StructDescriptor,
) -> Result<(), SchemaError> {
    let mut seen_names = HashSet::new();

    for field in &descriptor.fields {
        if field.name == registry.discriminant {
            return Err(SchemaError::validation(format!(
                "discriminant '{}' listed as a field of '{}'",
                field.name, descriptor.kind
            )));
        }

        // Classes may not declare a property named `constructor`.
        if field.name == "constructor" {
            return Err(SchemaError::validation(format!(
                "struct '{}' declares reserved field 'constructor'",
                descriptor.kind
            )));
        }

        if !seen_names.insert(field.name.as_str()) {
            return Err(SchemaError::DuplicateField {
                kind: descriptor.kind.clone(),
                field: field.name.clone(),
            });
        }
    }

    Ok(())
}

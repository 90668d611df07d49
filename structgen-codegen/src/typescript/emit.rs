//! Output document rendering and writing.

use crate::error::CodegenError;
use crate::typescript::classes::GeneratedClass;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// A complete generated file: the prologue followed by every class.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputDocument {
    /// Text placed before the classes.
    pub prologue: String,
    /// Classes in output order.
    pub classes: Vec<GeneratedClass>,
}

impl OutputDocument {
    /// Creates an empty document with the given prologue.
    #[must_use]
    pub fn new(prologue: impl Into<String>) -> Self {
        Self {
            prologue: prologue.into(),
            classes: Vec::new(),
        }
    }

    /// Appends a class.
    pub fn push(&mut self, class: GeneratedClass) {
        self.classes.push(class);
    }

    /// Returns the class names in output order.
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(|c| c.class_name.as_str())
    }

    /// Renders the document text.
    ///
    /// Every class is preceded by a blank line and the file ends with a
    /// single newline.
    #[must_use]
    pub fn render(&self) -> String {
        let mut output = self.prologue.trim_end().to_string();

        for class in &self.classes {
            if !output.is_empty() {
                output.push_str("\n\n");
            }
            output.push_str(&class.source());
        }

        output.push('\n');
        output
    }
}

/// Writes output documents to disk.
pub struct Emitter;

impl Emitter {
    /// Creates a new emitter.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Writes a document, replacing any existing file at `path`.
    ///
    /// The text goes to a temporary file in the destination directory which
    /// is then renamed over the destination, so readers never observe a
    /// partially written file. The directory must already exist.
    ///
    /// # Returns
    /// Number of bytes written.
    ///
    /// # Errors
    /// Returns `CodegenError::Io` if the destination cannot be written.
    pub fn write(&self, path: &Path, document: &OutputDocument) -> Result<usize, CodegenError> {
        let rendered = document.render();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut file = NamedTempFile::new_in(dir).map_err(|e| CodegenError::io(path, e))?;
        file.write_all(rendered.as_bytes())
            .map_err(|e| CodegenError::io(path, e))?;
        match fs::metadata(path) {
            Ok(existing) => file.as_file().set_permissions(existing.permissions()),
            Err(_) => set_default_permissions(file.as_file()),
        }
        .map_err(|e| CodegenError::io(path, e))?;
        file.persist(path).map_err(|e| CodegenError::io(path, e.error))?;

        tracing::info!(
            "Wrote {} ({} classes, {} bytes)",
            path.display(),
            document.classes.len(),
            rendered.len()
        );
        Ok(rendered.len())
    }
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(unix)]
fn set_default_permissions(file: &fs::File) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    file.set_permissions(fs::Permissions::from_mode(0o644))
}

#[cfg(not(unix))]
fn set_default_permissions(_file: &fs::File) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(name: &str) -> GeneratedClass {
        GeneratedClass {
            class_name: name.to_string(),
            fields: Vec::new(),
            body_text: format!("{{\n  kind: string;\n\n  constructor() {{\n    this.kind = \"{name}\";\n  }}\n}}"),
        }
    }

    #[test]
    fn test_render_prologue_only() {
        let document = OutputDocument::new("// header\nimport { BytesLike } from \"@ethersproject/bytes\";\n\n");
        assert_eq!(
            document.render(),
            "// header\nimport { BytesLike } from \"@ethersproject/bytes\";\n"
        );
    }

    #[test]
    fn test_render_separates_classes() {
        let mut document = OutputDocument::new("// header");
        document.push(class("Draw"));
        document.push(class("Shuffle"));

        let rendered = document.render();
        assert!(rendered.starts_with("// header\n\nexport class Draw {\n"));
        assert!(rendered.contains("}\n\nexport class Shuffle {\n"));
        assert!(rendered.ends_with("}\n"));
        assert_eq!(document.class_names().collect::<Vec<_>>(), vec!["Draw", "Shuffle"]);
    }

    #[test]
    fn test_render_without_prologue() {
        let mut document = OutputDocument::new("");
        document.push(class("Draw"));
        assert!(document.render().starts_with("export class Draw {"));
    }

    #[test]
    fn test_write_replaces_existing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("MyWord.ts");
        fs::write(&path, "stale contents that are longer than the new file").expect("seed");

        let document = OutputDocument::new("// header");
        let written = Emitter::new().write(&path, &document).expect("write");

        assert_eq!(fs::read_to_string(&path).expect("read"), "// header\n");
        assert_eq!(written, "// header\n".len());
        let entries = fs::read_dir(dir.path()).expect("read dir").count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn test_write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("generated").join("MyWord.ts");

        let err = Emitter::default()
            .write(&path, &OutputDocument::new("// header"))
            .expect_err("missing directory");

        assert!(matches!(err, CodegenError::Io { .. }));
        assert!(!path.exists());
        assert!(!dir.path().join("generated").exists());
    }
}

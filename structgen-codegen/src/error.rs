//! Error types for code generation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Declaration does not match the expected interface shape.
    #[error("schema error: {0}")]
    Schema(#[from] structgen_schema::SchemaError),

    /// Source unreadable or destination unwritable.
    #[error("IO error on '{}'", path.display())]
    Io {
        /// Path being read or written.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },
}

impl CodegenError {
    /// Creates an IO error for the given path.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_names_path() {
        let err = CodegenError::io(
            "generated/MyWord.ts",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        );
        assert_eq!(err.to_string(), "IO error on 'generated/MyWord.ts'");
        assert_eq!(
            std::error::Error::source(&err).map(ToString::to_string),
            Some("no such directory".to_string())
        );
    }

    #[test]
    fn test_io_cause_reported_once() {
        let err = CodegenError::io(
            "typechain/MyWord.d.ts",
            std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        );
        let chain = std::iter::successors(Some(&err as &dyn std::error::Error), |e| e.source())
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(": ");
        assert_eq!(chain, "IO error on 'typechain/MyWord.d.ts': not found");
    }

    #[test]
    fn test_parse_failure_reported_as_schema_error() {
        let err = CodegenError::from(structgen_schema::SchemaError::from(
            structgen_schema::ParseError::Aborted,
        ));
        assert!(matches!(
            err,
            CodegenError::Schema(structgen_schema::SchemaError::Parse(_))
        ));
    }

    #[test]
    fn test_schema_error_wraps() {
        let err = CodegenError::from(structgen_schema::SchemaError::NoInterface);
        assert_eq!(err.to_string(), "schema error: no interface declaration found");
    }
}

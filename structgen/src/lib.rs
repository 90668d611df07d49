//! # structgen
//!
//! Generates TypeScript struct classes from typechain contract declarations.
//!
//! A contract exposes one trivial public function per state struct, named
//! `<Kind>Struct`, so that the struct shows up in the ABI. Typechain renders
//! those functions into a `.d.ts` file with the struct as an inline type
//! literal. structgen reads that file and emits one class per kind whose
//! constructor takes the struct fields positionally and tags the instance
//! with its kind.
//!
//! ## Quick Start
//!
//! ```ignore
//! use structgen::prelude::*;
//!
//! let config = GeneratorConfig::default();
//! let report = Generator::new(&config).run(
//!     Path::new("typechain/MyWord.d.ts"),
//!     Path::new("generated/MyWord.ts"),
//! )?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`schema`] - Declaration parsing and the struct registry
//! - [`codegen`] - Class synthesis and output writing

pub mod prelude;

/// Declaration parsing and struct schema extraction.
pub mod schema {
    pub use structgen_schema::*;
}

/// TypeScript class generation.
pub mod codegen {
    pub use structgen_codegen::*;
}

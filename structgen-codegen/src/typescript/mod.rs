//! TypeScript code generation modules.

pub mod classes;
pub mod emit;

pub use classes::{ClassSynthesizer, GeneratedClass};
pub use emit::{Emitter, OutputDocument};

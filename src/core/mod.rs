//! Core binstub generation.
//!
//! Two stages run per input line:
//!
//! 1. **Scan** (`scanner`): find blank-import declarations and their trailing comments
//! 2. **Generate** (`directive` + `stub`): read `binstub:` directives and write the script
//!
//! `generate` drives both over a whole file.

pub mod directive;
pub mod generate;
pub mod scanner;
pub mod stub;

pub use directive::{Directive, StubOptions};
pub use generate::{
    DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, GenerateOptions, GenerateSummary, StubEvent, generate,
};
pub use scanner::{ImportDeclaration, scan_declarations};

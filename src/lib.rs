//! Binstubs - run pinned Go tools without installing them
//!
//! Scans a project's `tools.go` for blank imports and writes one small shell
//! script per tool into `bin/`. Each script runs the tool through `go run`, so
//! the version pinned in `go.mod` is always used.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: Configuration file loading and parsing
//! - `core`: Declaration scanning and binstub generation
//! - `error`: Error types for the generation pipeline

pub mod cli;
pub mod config;
pub mod core;
pub mod error;

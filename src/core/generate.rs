//! Scan → generate pipeline.
//!
//! One forward pass over the input: each import declaration is turned into
//! a binstub (or skipped) before the next line is read. The first error
//! aborts the run; stubs already written are left in place.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use super::{
    directive::StubOptions,
    scanner::{ImportDeclaration, scan_declarations},
    stub::{ensure_output_dir, run_command, stub_name, write_stub},
};
use crate::error::{BinstubError, Result};

pub const DEFAULT_INPUT: &str = "tools.go";
pub const DEFAULT_OUTPUT_DIR: &str = "bin";

/// Where to read declarations from and where to write binstubs.
///
/// `input` and `output_dir` are resolved against `root` unless absolute.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub root: PathBuf,
    pub input: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl GenerateOptions {
    pub fn input_path(&self) -> PathBuf {
        self.root.join(&self.input)
    }

    pub fn output_path(&self) -> PathBuf {
        self.root.join(&self.output_dir)
    }
}

/// Progress notifications emitted while generating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StubEvent<'a> {
    /// A binstub was written. The path is relative to the project root
    /// when `output_dir` is relative.
    Written(&'a Path),
    /// An import was skipped via `binstub:ignore`.
    Skipped(&'a str),
}

/// Result of a generation run.
#[derive(Debug, Default)]
pub struct GenerateSummary {
    /// Number of import declarations matched in the input.
    pub matched: usize,
    pub written: Vec<PathBuf>,
    /// Module paths skipped via `binstub:ignore`.
    pub skipped: Vec<String>,
}

/// Generate binstubs for every import declaration in the input file.
///
/// `on_event` is called as each stub is written or skipped, so progress is
/// visible even if a later declaration aborts the run.
///
/// # Errors
/// - `Io` if the input cannot be read or a stub cannot be written
/// - `DirectiveSyntax` / `InvalidModulePath` for a bad declaration
/// - `NoDeclarationsFound` if the input contains no imports
pub fn generate<F>(options: &GenerateOptions, mut on_event: F) -> Result<GenerateSummary>
where
    F: FnMut(StubEvent<'_>),
{
    let input_path = options.input_path();
    let output_path = options.output_path();
    let file = File::open(&input_path).map_err(|err| BinstubError::io(&input_path, err))?;

    let mut summary = GenerateSummary::default();
    let mut output_dir_ready = false;

    for declaration in scan_declarations(BufReader::new(file)) {
        let declaration = declaration.map_err(|err| BinstubError::io(&input_path, err))?;
        summary.matched += 1;

        let stub_options = StubOptions::from_declaration(&declaration)?;
        if stub_options.skip {
            on_event(StubEvent::Skipped(&declaration.module_path));
            summary.skipped.push(declaration.module_path);
            continue;
        }

        let name = binstub_name(&declaration)?;
        if !output_dir_ready {
            ensure_output_dir(&output_path)?;
            output_dir_ready = true;
        }

        write_stub(
            &output_path.join(name),
            &run_command(&stub_options),
            &declaration.module_path,
        )?;

        let written = options.output_dir.join(name);
        on_event(StubEvent::Written(&written));
        summary.written.push(written);
    }

    if summary.matched == 0 {
        return Err(BinstubError::NoDeclarationsFound {
            input: options.input.clone(),
        });
    }

    Ok(summary)
}

fn binstub_name(declaration: &ImportDeclaration) -> Result<&str> {
    stub_name(&declaration.module_path).ok_or_else(|| BinstubError::InvalidModulePath {
        line: declaration.line,
        module_path: declaration.module_path.clone(),
    })
}

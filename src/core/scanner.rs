//! Declaration scanning for `tools.go`-style files.
//!
//! Recognizes blank-import lines of the form:
//! - `    _ "github.com/org/tool/cmd/foo"`
//! - `    _ "github.com/org/tool/cmd/foo" // binstub:ignore`
//! - `import _ "github.com/org/tool/cmd/foo"`
//!
//! Anything else in the file is ignored.

use regex::Regex;
use std::io::{self, BufRead, Lines};
use std::sync::LazyLock;

// Capture group 1: module path inside the quotes
// Capture group 2: trailing text after an optional `//` marker
static IMPORT_LINE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*(?:import\s+)?_\s+"([^"]+)"\s*(?://)?\s*(.*)$"#).unwrap()
});

/// A blank import found in the input file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportDeclaration {
    pub module_path: String,
    /// Comment text after the module path, trimmed. Empty if there is none.
    pub trailing_comment: String,
    /// 1-based line number in the input.
    pub line: usize,
}

/// Parse a single line, returning `None` if it is not an import declaration.
pub fn parse_line(text: &str, line: usize) -> Option<ImportDeclaration> {
    let captures = IMPORT_LINE_REGEX.captures(text)?;
    let module_path = captures.get(1)?.as_str().trim();
    if module_path.is_empty() {
        return None;
    }
    let trailing_comment = captures.get(2).map_or("", |m| m.as_str().trim());

    Some(ImportDeclaration {
        module_path: module_path.to_string(),
        trailing_comment: trailing_comment.to_string(),
        line,
    })
}

/// Lazy, single-pass iterator over the import declarations of a reader.
pub struct Declarations<R> {
    lines: Lines<R>,
    line: usize,
}

impl<R: BufRead> Iterator for Declarations<R> {
    type Item = io::Result<ImportDeclaration>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let text = match self.lines.next()? {
                Ok(text) => text,
                Err(err) => return Some(Err(err)),
            };
            self.line += 1;

            if let Some(declaration) = parse_line(&text, self.line) {
                return Some(Ok(declaration));
            }
        }
    }
}

/// Scan a reader for import declarations, in file order.
pub fn scan_declarations<R: BufRead>(reader: R) -> Declarations<R> {
    Declarations {
        lines: reader.lines(),
        line: 0,
    }
}

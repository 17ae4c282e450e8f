//! Inline `binstub:` directive parsing.
//!
//! Supported directives, trailing an import declaration:
//! - `binstub:ignore` - do not generate a binstub for this import
//! - `binstub:args="ARGS"` - pass extra flags to `go run`
//!
//! Any other `binstub:<word>` is rejected with a syntax error.

use regex::Regex;
use std::sync::LazyLock;

use super::scanner::ImportDeclaration;
use crate::error::{BinstubError, Result};

// Capture group 1: directive keyword
// Capture group 2: value, with surrounding quotes stripped
static DIRECTIVE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"binstub:(\w+)=?"?([^"]*)"?\s*"#).unwrap());

/// Parsed binstub directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    Ignore,
    Args(String),
}

impl Directive {
    /// Parse the first directive in a comment.
    ///
    /// # Returns
    /// - `Ok(None)` if the comment carries no directive
    /// - `Ok(Some(Directive))` for a recognized directive
    /// - `Err` for an unknown keyword or `args` without a value
    pub fn parse(comment: &str, line: usize) -> Result<Option<Self>> {
        let Some(captures) = DIRECTIVE_REGEX.captures(comment) else {
            return Ok(None);
        };
        let keyword = captures.get(1).map_or("", |m| m.as_str());
        let value = captures.get(2).map_or("", |m| m.as_str().trim());

        let syntax_error = |reason: String| BinstubError::DirectiveSyntax {
            line,
            comment: comment.to_string(),
            reason,
        };

        match keyword {
            "ignore" => Ok(Some(Self::Ignore)),
            "args" if value.is_empty() => {
                Err(syntax_error("binstub:args requires a value".to_string()))
            }
            "args" => Ok(Some(Self::Args(value.to_string()))),
            other => Err(syntax_error(format!("unknown directive {:?}", other))),
        }
    }
}

/// Generator options for a single import.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StubOptions {
    pub skip: bool,
    /// Extra flags for `go run`. Empty means none.
    pub extra_args: String,
}

impl StubOptions {
    pub fn from_declaration(declaration: &ImportDeclaration) -> Result<Self> {
        let options = match Directive::parse(&declaration.trailing_comment, declaration.line)? {
            None => Self::default(),
            Some(Directive::Ignore) => Self {
                skip: true,
                ..Self::default()
            },
            Some(Directive::Args(extra_args)) => Self {
                skip: false,
                extra_args,
            },
        };
        Ok(options)
    }
}

use std::{io, path::PathBuf};

pub type Result<T> = std::result::Result<T, BinstubError>;

#[derive(Debug, thiserror::Error)]
pub enum BinstubError {
    #[error("failed to access {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("bad syntax for comment on line {line}: {comment:?} ({reason})")]
    DirectiveSyntax {
        line: usize,
        comment: String,
        reason: String,
    },

    #[error("cannot derive a binstub name from {module_path:?} on line {line}")]
    InvalidModulePath { line: usize, module_path: String },

    #[error("no imports found in {}", .input.display())]
    NoDeclarationsFound { input: PathBuf },
}

impl BinstubError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
